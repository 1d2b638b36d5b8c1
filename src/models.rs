use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Themes the backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppTheme {
    Light,
    Dark,
    Foxy,
    DarkOcean,
}

impl std::str::FromStr for AppTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(AppTheme::Light),
            "dark" => Ok(AppTheme::Dark),
            "foxy" => Ok(AppTheme::Foxy),
            "darkocean" | "dark-ocean" => Ok(AppTheme::DarkOcean),
            other => Err(format!("Unknown theme `{}` (light, dark, foxy, darkocean)", other)),
        }
    }
}

/// Per-user client settings, returned by login and written by settings-save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(rename = "Theme")]
    pub theme: AppTheme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self { theme: AppTheme::Light }
    }
}

/// A single item in the user's fridge.
///
/// Field names on the wire are PascalCase; `ExpireDate` is optional because
/// not every ingredient has one (spices, canned goods).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Quantity")]
    pub quantity: f32,

    #[serde(rename = "Unit")]
    pub unit: String,

    #[serde(rename = "ExpireDate", default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Recipe")]
    pub title: String,

    #[serde(rename = "Banner")]
    pub banner: String,

    #[serde(rename = "Tags")]
    pub tags: Vec<String>,

    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<Ingredient>,

    #[serde(rename = "Source")]
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            quantity: 1.5,
            unit: "L".to_string(),
            expire_date: Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn ingredient_round_trips() {
        let ingredient = sample_ingredient();
        let encoded = serde_json::to_string(&ingredient).unwrap();
        let decoded: Ingredient = serde_json::from_str(&encoded).unwrap();
        assert_eq!(ingredient, decoded);
    }

    #[test]
    fn ingredient_uses_wire_field_names() {
        let value = serde_json::to_value(sample_ingredient()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["Name", "Category", "Quantity", "Unit", "ExpireDate"] {
            assert!(object.contains_key(key), "missing wire field {}", key);
        }
    }

    #[test]
    fn missing_expire_date_is_accepted_and_omitted() {
        let decoded: Ingredient =
            serde_json::from_str(r#"{"Name":"Salt","Category":"Spices","Quantity":1.0,"Unit":"Units"}"#).unwrap();
        assert_eq!(decoded.expire_date, None);

        let value = serde_json::to_value(&decoded).unwrap();
        assert!(value.get("ExpireDate").is_none());
    }

    #[test]
    fn recipe_round_trips() {
        let recipe = Recipe {
            title: "Scrambled eggs".to_string(),
            banner: "https://cdn.example.com/eggs.png".to_string(),
            tags: vec!["breakfast".to_string(), "quick".to_string()],
            ingredients: vec![sample_ingredient()],
            source: "https://example.com/eggs".to_string(),
        };
        let decoded: Recipe = serde_json::from_value(serde_json::to_value(&recipe).unwrap()).unwrap();
        assert_eq!(recipe, decoded);
    }

    #[test]
    fn settings_round_trip_and_theme_encoding() {
        let settings = UserSettings { theme: AppTheme::DarkOcean };
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, serde_json::json!({ "Theme": "DarkOcean" }));

        let decoded: UserSettings = serde_json::from_value(value).unwrap();
        assert_eq!(settings, decoded);
    }

    #[test]
    fn theme_parses_from_user_input() {
        assert_eq!("dark".parse::<AppTheme>().unwrap(), AppTheme::Dark);
        assert_eq!("dark-ocean".parse::<AppTheme>().unwrap(), AppTheme::DarkOcean);
        assert!("solarized".parse::<AppTheme>().is_err());
    }
}
