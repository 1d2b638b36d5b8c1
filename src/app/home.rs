use crate::models::Recipe;

/// State behind the home screen: the recipe list and the active search query.
#[derive(Debug, Default)]
pub struct HomeModel {
    recipes: Vec<Recipe>,
    pub query: String,
}

impl HomeModel {
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    pub fn render(&self) -> String {
        if self.recipes.is_empty() {
            return "No recipes to show.".to_string();
        }

        self.recipes
            .iter()
            .map(|recipe| format!("- {} [{}] ({})", recipe.title, recipe.tags.join(", "), recipe.source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_titles_and_tags() {
        let mut model = HomeModel::default();
        model.set_recipes(vec![Recipe {
            title: "Omelette".to_string(),
            banner: String::new(),
            tags: vec!["breakfast".to_string()],
            ingredients: vec![],
            source: "https://example.com".to_string(),
        }]);

        let rendered = model.render();
        assert!(rendered.contains("Omelette"));
        assert!(rendered.contains("breakfast"));
    }

    #[test]
    fn empty_list_renders_a_placeholder() {
        assert_eq!(HomeModel::default().render(), "No recipes to show.");
    }
}
