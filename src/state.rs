use std::sync::OnceLock;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::service::ServiceRegistry;

static APP_STATE: OnceLock<AppState> = OnceLock::new();

#[derive(Clone)]
pub struct AppState {
    pub services: ServiceRegistry,
}

impl AppState {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            services: ServiceRegistry::new(config)?,
        })
    }

    pub fn init(config: &AppConfig) -> AppResult<()> {
        Self::set_global(Self::new(config)?)
    }

    pub fn set_global(state: AppState) -> AppResult<()> {
        APP_STATE
            .set(state)
            .map_err(|_| AppError::AppState("Failed to set global app state".into()))
    }

    pub fn get() -> AppResult<AppState> {
        APP_STATE
            .get()
            .cloned()
            .ok_or_else(|| AppError::AppState("App state not initialized".into()))
    }
}
