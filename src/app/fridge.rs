use crate::models::Ingredient;

/// State behind the fridge screen: the inventory as last fetched and the
/// active search query.
#[derive(Debug, Default)]
pub struct FridgeModel {
    ingredients: Vec<Ingredient>,
    pub query: String,
}

impl FridgeModel {
    pub fn set_ingredients(&mut self, ingredients: Vec<Ingredient>) {
        self.ingredients = ingredients;
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn render(&self) -> String {
        if self.ingredients.is_empty() {
            return "The fridge is empty.".to_string();
        }

        self.ingredients
            .iter()
            .map(|ingredient| {
                let expires = match ingredient.expire_date {
                    Some(date) => format!(", expires {}", date.format("%Y-%m-%d")),
                    None => String::new(),
                };
                format!(
                    "- {} ({}): {} {}{}",
                    ingredient.name, ingredient.category, ingredient.quantity, ingredient.unit, expires
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fetch_replaces_the_list() {
        let milk = Ingredient {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            quantity: 1.0,
            unit: "L".to_string(),
            expire_date: None,
        };
        let eggs = Ingredient {
            name: "Eggs".to_string(),
            category: "Dairy".to_string(),
            quantity: 10.0,
            unit: "Units".to_string(),
            expire_date: None,
        };

        let mut model = FridgeModel::default();
        model.set_ingredients(vec![milk]);
        model.set_ingredients(vec![eggs]);

        assert_eq!(model.ingredients().len(), 1);
        assert_eq!(model.ingredients()[0].name, "Eggs");
    }

    #[test]
    fn render_mentions_quantity_and_unit() {
        let mut model = FridgeModel::default();
        model.set_ingredients(vec![Ingredient {
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            quantity: 1.5,
            unit: "L".to_string(),
            expire_date: None,
        }]);

        let rendered = model.render();
        assert!(rendered.contains("Milk"));
        assert!(rendered.contains("1.5 L"));
    }
}
