mod error;
pub use error::{ApiError, ApiResult};

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    redirect, Client, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;

pub const USER_AGENT: &str = concat!("smartfridge/", env!("CARGO_PKG_VERSION"));

/// Paths served by the SmartFridge backend. Every route is a POST taking a
/// JSON object body.
pub mod routes {
    pub const REGISTER: &str = "/user/register";
    pub const LOGIN: &str = "/user/login";
    pub const LOGOUT: &str = "/user/logout";

    pub const GET_RECIPES: &str = "/recipes";
    pub const SEARCH_RECIPES: &str = "/recipes/search";
    pub const RECIPE_DETAILS: &str = "/recipes/details";

    pub const GET_INGREDIENTS: &str = "/ingredients";
    pub const ADD_INGREDIENT: &str = "/ingredients/add";
    pub const EDIT_INGREDIENT: &str = "/ingredients/edit";
    pub const REMOVE_INGREDIENT: &str = "/ingredients/remove";
    pub const SEARCH_INGREDIENTS: &str = "/ingredients/search";

    pub const SAVE_SETTINGS: &str = "/settings/save";
}

#[derive(Clone)]
pub struct HttpService {
    client: Client,
    base_url: url::Url,
}

impl HttpService {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        info!("Initializing HttpService for {}", config.base_url);

        // Redirects are not followed: a 3xx answer surfaces as a failure with
        // its status preserved, like every other non-2xx.
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(redirect::Policy::none())
            .default_headers(build_default_headers())
            .user_agent(USER_AGENT)
            .build()?;

        info!("HttpService initialized");

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// POST `payload` to `path` and decode the response body into `T`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, payload: &Value) -> ApiResult<T> {
        let value = self.post_json(path, payload).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("Unexpected response shape: {}", e)))
    }

    /// POST `payload` to `path`, returning the raw JSON body. Routes that
    /// answer a bare `200 OK` yield `Value::Null`.
    pub async fn post_json(&self, path: &str, payload: &Value) -> ApiResult<Value> {
        let url = self.base_url.join(path)?;

        debug!("POST {}", url);

        let response = self.client.post(url).json(payload).send().await;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Result<Response, reqwest::Error>) -> ApiResult<Value> {
        match response {
            Ok(resp) => {
                let status = resp.status();

                if status.is_redirection() {
                    let location = resp
                        .headers()
                        .get(header::LOCATION)
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("");
                    info!("Redirected to: {}", location);
                }

                if status.is_success() {
                    let body = resp.text().await?;

                    if body.trim().is_empty() {
                        return Ok(Value::Null);
                    }

                    serde_json::from_str(&body)
                        .map_err(|e| ApiError::Decode(format!("Failed to parse JSON: {}, response: {}", e, body)))
                } else {
                    let message = match resp.text().await {
                        Ok(body) if !body.trim().is_empty() => body,
                        _ => status.canonical_reason().unwrap_or("Unknown status").to_string(),
                    };

                    warn!("Request failed with HTTP {}: {}", status.as_u16(), message);

                    Err(ApiError::Status {
                        code: status.as_u16(),
                        message,
                    })
                }
            }
            Err(e) => {
                warn!("Request failed: {}", e);
                Err(ApiError::Network(e))
            }
        }
    }
}

fn build_default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
