mod error;
pub mod auth;
pub mod fridge;
pub mod http;
pub mod recipes;
pub mod session;
pub mod settings;

pub use error::ServiceError;

use auth::AuthService;
use fridge::FridgeService;
use http::HttpService;
use recipes::RecipeService;
use session::SessionService;
use settings::SettingsService;

use crate::config::AppConfig;

/// Every per-resource service, wired over one HTTP client and one shared
/// session holder.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub auth: AuthService,
    pub fridge: FridgeService,
    pub recipes: RecipeService,
    pub settings: SettingsService,
    pub session: SessionService,
}

impl ServiceRegistry {
    pub fn new(config: &AppConfig) -> Result<Self, ServiceError> {
        info!("Initializing service registry");

        let http = HttpService::new(&config.api)?;
        let session = SessionService::new();

        let registry = Self {
            auth: AuthService::new(http.clone(), session.clone()),
            fridge: FridgeService::new(http.clone(), session.clone()),
            recipes: RecipeService::new(http.clone(), session.clone()),
            settings: SettingsService::new(http, session.clone()),
            session,
        };

        info!("Service registry initialized");

        Ok(registry)
    }
}
