use serde_json::json;

use super::http::{routes, HttpService};
use super::session::SessionService;
use super::ServiceError;
use crate::models::Ingredient;

#[derive(Clone)]
pub struct FridgeService {
    http: HttpService,
    session: SessionService,
}

impl FridgeService {
    pub fn new(http: HttpService, session: SessionService) -> Self {
        Self { http, session }
    }

    pub async fn ingredients(&self) -> Result<Vec<Ingredient>, ServiceError> {
        let token = self.session.token()?;

        let list: Vec<Ingredient> = self.http.post(routes::GET_INGREDIENTS, &json!({ "token": token })).await?;
        debug!("Fetched {} ingredients", list.len());

        Ok(list)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Ingredient>, ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "query": query });
        let list: Vec<Ingredient> = self.http.post(routes::SEARCH_INGREDIENTS, &payload).await?;
        debug!("Search `{}` matched {} ingredients", query, list.len());

        Ok(list)
    }

    pub async fn add(&self, ingredient: &Ingredient) -> Result<(), ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "ingredient": ingredient });
        self.http.post_json(routes::ADD_INGREDIENT, &payload).await?;

        info!("Ingredient {} added", ingredient.name);
        Ok(())
    }

    pub async fn edit(&self, ingredient: &Ingredient) -> Result<(), ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "ingredient": ingredient });
        self.http.post_json(routes::EDIT_INGREDIENT, &payload).await?;

        info!("Ingredient {} edited", ingredient.name);
        Ok(())
    }

    pub async fn remove(&self, ingredient_id: &str) -> Result<(), ServiceError> {
        let token = self.session.token()?;

        let payload = json!({ "token": token, "ingredient_id": ingredient_id });
        self.http.post_json(routes::REMOVE_INGREDIENT, &payload).await?;

        info!("Ingredient {} removed", ingredient_id);
        Ok(())
    }
}
