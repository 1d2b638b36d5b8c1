use serde_json::json;

use super::http::{routes, HttpService};
use super::session::SessionService;
use super::ServiceError;
use crate::models::Recipe;

#[derive(Clone)]
pub struct RecipeService {
    http: HttpService,
    session: SessionService,
}

impl RecipeService {
    pub fn new(http: HttpService, session: SessionService) -> Self {
        Self { http, session }
    }

    pub async fn recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        let token = self.session.token()?;

        let list: Vec<Recipe> = self.http.post(routes::GET_RECIPES, &json!({ "token": token })).await?;
        debug!("Fetched {} recipes", list.len());

        Ok(list)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>, ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "query": query });
        let list: Vec<Recipe> = self.http.post(routes::SEARCH_RECIPES, &payload).await?;
        debug!("Search `{}` matched {} recipes", query, list.len());

        Ok(list)
    }

    pub async fn details(&self, recipe_id: &str) -> Result<Recipe, ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "recipeId": recipe_id });
        let recipe = self.http.post(routes::RECIPE_DETAILS, &payload).await?;

        Ok(recipe)
    }
}
