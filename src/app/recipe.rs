use crate::models::Recipe;

/// State behind the recipe-detail screen.
#[derive(Debug, Default)]
pub struct RecipeModel {
    selected: Option<Recipe>,
}

impl RecipeModel {
    pub fn select(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
    }

    pub fn render(&self) -> String {
        let Some(recipe) = &self.selected else {
            return "No recipe selected.".to_string();
        };

        let mut out = vec![
            recipe.title.clone(),
            format!("Tags: {}", recipe.tags.join(", ")),
            format!("Source: {}", recipe.source),
            "Ingredients:".to_string(),
        ];
        for ingredient in &recipe.ingredients {
            out.push(format!("  - {} {} {}", ingredient.quantity, ingredient.unit, ingredient.name));
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    #[test]
    fn render_shows_the_selected_recipe() {
        let mut model = RecipeModel::default();
        model.select(Recipe {
            title: "Pancakes".to_string(),
            banner: String::new(),
            tags: vec!["breakfast".to_string()],
            ingredients: vec![Ingredient {
                name: "Flour".to_string(),
                category: "Baking".to_string(),
                quantity: 200.0,
                unit: "g".to_string(),
                expire_date: None,
            }],
            source: "grandma".to_string(),
        });

        let rendered = model.render();
        assert!(rendered.contains("Pancakes"));
        assert!(rendered.contains("200 g Flour"));
    }
}
