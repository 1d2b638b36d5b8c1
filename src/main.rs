use app::App;
use state::AppState;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;

mod app;
mod commands;
mod config;
mod error;
mod models;
mod service;
mod state;


#[tokio::main]
async fn main() -> error::AppResult<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = pretty_env_logger::try_init_timed();

    info!("Starting SmartFridge client...");

    let config = config::build_config()?;
    config::AppConfig::set_global(config)?;

    info!("Initializing AppState...");
    AppState::init(config::AppConfig::get()?)?;

    let state = AppState::get()?;

    App::run(state.services).await
}
