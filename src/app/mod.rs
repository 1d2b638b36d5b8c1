mod fridge;
mod home;
mod login;
mod recipe;
mod settings;

pub use fridge::FridgeModel;
pub use home::HomeModel;
pub use login::LoginModel;
pub use recipe::RecipeModel;
pub use settings::SettingsModel;

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::commands::Command;
use crate::error::AppResult;
use crate::models::{Ingredient, Recipe};
use crate::service::session::Session;
use crate::service::{ServiceError, ServiceRegistry};

const UNAUTHORIZED: i32 = 401;

/// Navigation targets, mirroring the screens of the original client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    Fridge,
    Recipe,
    Settings,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::Fridge => "fridge",
            Screen::Recipe => "recipe",
            Screen::Settings => "settings",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a service call, delivered back to the driver loop by the worker
/// task that ran it. Screen state is only ever mutated on the loop.
#[derive(Debug)]
pub enum UiEvent {
    Registered(Result<(), ServiceError>),
    LoggedIn(Result<Session, ServiceError>),
    LoggedOut(Result<(), ServiceError>),
    IngredientsLoaded(Result<Vec<Ingredient>, ServiceError>),
    FridgeChanged(Result<(), ServiceError>, String),
    RecipesLoaded(Result<Vec<Recipe>, ServiceError>),
    RecipeLoaded(Result<Recipe, ServiceError>),
    SettingsSaved(Result<(), ServiceError>),
}

pub struct App {
    services: ServiceRegistry,
    events: mpsc::UnboundedSender<UiEvent>,
    screen: Screen,

    pub login: LoginModel,
    pub home: HomeModel,
    pub fridge: FridgeModel,
    pub recipe: RecipeModel,
    pub settings: SettingsModel,
}

impl App {
    pub fn new(services: ServiceRegistry, events: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            services,
            events,
            screen: Screen::Login,
            login: LoginModel::default(),
            home: HomeModel::default(),
            fridge: FridgeModel::default(),
            recipe: RecipeModel::default(),
            settings: SettingsModel::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Drive the command loop until the user quits or stdin closes. Input is
    /// read here; service calls run on spawned workers and come back as
    /// `UiEvent`s, so this task is the only one touching screen state.
    pub async fn run(services: ServiceRegistry) -> AppResult<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(services, tx);

        println!("{}", Command::help_text());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            app.prompt();

            tokio::select! {
                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            if !app.handle_line(&line) {
                                break;
                            }
                        }
                        // stdin closed
                        Ok(None) => break,
                        Err(e) => {
                            return Err(anyhow::anyhow!("Failed to read input: {}", e).into());
                        }
                    }
                }
                Some(event) = rx.recv() => app.apply(event),
            }
        }

        info!("Exiting");
        Ok(())
    }

    fn prompt(&self) {
        print!("smartfridge[{}]> ", self.screen);
        let _ = std::io::stdout().flush();
    }

    /// Returns false when the loop should stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Ok(Command::Quit) => false,
            Ok(command) => {
                self.dispatch(command);
                true
            }
            Err(message) => {
                println!("{}", message);
                true
            }
        }
    }

    /// Run a command. Anything touching the network is handed to a worker
    /// task; the result arrives later through the event channel.
    pub fn dispatch(&mut self, command: Command) {
        if needs_session(&command) && !self.services.session.is_authenticated() {
            println!("Please log in first.");
            return;
        }

        match command {
            Command::Help => println!("{}", Command::help_text()),
            Command::Quit => {}

            Command::Theme { theme } => {
                self.settings.set_theme(theme);
                self.screen = Screen::Settings;
                println!("Theme set to {:?} (save-settings to persist)", theme);
            }

            Command::Register { username, password } => {
                self.spawn(UiEvent::Registered, move |services| async move {
                    let credentials = crate::service::auth::Credentials { username, password };
                    services.auth.register(&credentials).await
                });
            }
            Command::Login { username, password } => {
                self.login.submitted(&username);
                self.spawn(UiEvent::LoggedIn, move |services| async move {
                    let credentials = crate::service::auth::Credentials { username, password };
                    services.auth.login(&credentials).await
                });
            }
            Command::Logout => {
                self.spawn(UiEvent::LoggedOut, move |services| async move {
                    services.auth.logout().await
                });
            }

            Command::Ingredients => {
                self.fridge.query.clear();
                self.refresh_fridge();
            }
            Command::SearchIngredients { query } => {
                self.fridge.query = query.clone();
                self.spawn(UiEvent::IngredientsLoaded, move |services| async move {
                    services.fridge.search(&query).await
                });
            }
            Command::AddIngredient { ingredient } => {
                let message = format!("Ingredient {} added.", ingredient.name);
                self.spawn(
                    move |result| UiEvent::FridgeChanged(result, message),
                    move |services| async move { services.fridge.add(&ingredient).await },
                );
            }
            Command::EditIngredient { ingredient } => {
                let message = format!("Ingredient {} edited.", ingredient.name);
                self.spawn(
                    move |result| UiEvent::FridgeChanged(result, message),
                    move |services| async move { services.fridge.edit(&ingredient).await },
                );
            }
            Command::RemoveIngredient { ingredient_id } => {
                let message = format!("Ingredient {} removed.", ingredient_id);
                self.spawn(
                    move |result| UiEvent::FridgeChanged(result, message),
                    move |services| async move { services.fridge.remove(&ingredient_id).await },
                );
            }

            Command::Recipes => {
                self.home.query.clear();
                self.spawn(UiEvent::RecipesLoaded, move |services| async move {
                    services.recipes.recipes().await
                });
            }
            Command::SearchRecipes { query } => {
                self.home.query = query.clone();
                self.spawn(UiEvent::RecipesLoaded, move |services| async move {
                    services.recipes.search(&query).await
                });
            }
            Command::RecipeDetails { recipe_id } => {
                self.spawn(UiEvent::RecipeLoaded, move |services| async move {
                    services.recipes.details(&recipe_id).await
                });
            }

            Command::SaveSettings => {
                let settings = self.settings.draft().clone();
                self.spawn(UiEvent::SettingsSaved, move |services| async move {
                    services.settings.save(&settings).await
                });
            }
        }
    }

    fn spawn<T, F, Fut>(&self, wrap: impl FnOnce(Result<T, ServiceError>) -> UiEvent + Send + 'static, work: F)
    where
        T: Send + 'static,
        F: FnOnce(ServiceRegistry) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        let services = self.services.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = work(services).await;
            let _ = events.send(wrap(result));
        });
    }

    fn refresh_fridge(&self) {
        self.spawn(UiEvent::IngredientsLoaded, move |services| async move {
            services.fridge.ingredients().await
        });
    }

    /// Apply a completed service call to screen state.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Registered(Ok(())) => {
                println!("Account created. You can log in now.");
            }
            UiEvent::Registered(Err(e)) => self.on_failure(e),

            UiEvent::LoggedIn(Ok(session)) => {
                self.settings.adopt(session.preferences);
                self.screen = Screen::Home;
                println!("Logged in as {}.", self.login.username);
            }
            UiEvent::LoggedIn(Err(e)) => {
                self.login.failed(e.to_string());
                self.screen = Screen::Login;
                if let Some(message) = &self.login.error {
                    println!("Login failed: {}", message);
                }
            }

            UiEvent::LoggedOut(result) => {
                if let Err(e) = result {
                    // the local session is already gone; just report
                    println!("Logout reported an error: {}", e);
                } else {
                    println!("Logged out.");
                }
                self.login.reset();
                self.screen = Screen::Login;
            }

            UiEvent::IngredientsLoaded(Ok(ingredients)) => {
                self.fridge.set_ingredients(ingredients);
                self.screen = Screen::Fridge;
                if !self.fridge.query.is_empty() {
                    println!("Results for `{}`:", self.fridge.query);
                }
                println!("{}", self.fridge.render());
            }
            UiEvent::IngredientsLoaded(Err(e)) => self.on_failure(e),

            UiEvent::FridgeChanged(Ok(()), message) => {
                println!("{}", message);
                self.refresh_fridge();
            }
            UiEvent::FridgeChanged(Err(e), _) => self.on_failure(e),

            UiEvent::RecipesLoaded(Ok(recipes)) => {
                self.home.set_recipes(recipes);
                self.screen = Screen::Home;
                if !self.home.query.is_empty() {
                    println!("Results for `{}`:", self.home.query);
                }
                println!("{}", self.home.render());
            }
            UiEvent::RecipesLoaded(Err(e)) => self.on_failure(e),

            UiEvent::RecipeLoaded(Ok(recipe)) => {
                self.recipe.select(recipe);
                self.screen = Screen::Recipe;
                println!("{}", self.recipe.render());
            }
            UiEvent::RecipeLoaded(Err(e)) => self.on_failure(e),

            UiEvent::SettingsSaved(Ok(())) => {
                self.screen = Screen::Settings;
                println!("Settings saved.");
            }
            UiEvent::SettingsSaved(Err(e)) => self.on_failure(e),
        }
    }

    /// Every failed service call lands here. A 401 means the server no longer
    /// honors the token: drop the session and go back to the login screen.
    fn on_failure(&mut self, error: ServiceError) {
        if error.status_code() == UNAUTHORIZED {
            warn!("Server rejected the session token");
            if let Err(e) = self.services.session.clear() {
                error!("Failed to clear session: {}", e);
            }
            self.screen = Screen::Login;
            println!("Session expired, please log in again.");
        } else {
            println!("Error: {}", error);
        }
    }
}

/// Commands that carry the session token and are pointless while logged out.
fn needs_session(command: &Command) -> bool {
    !matches!(
        command,
        Command::Help
            | Command::Quit
            | Command::Register { .. }
            | Command::Login { .. }
            | Command::Theme { .. }
    )
}
