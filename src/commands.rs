use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{AppTheme, Ingredient};

/// Everything the command loop understands. One variant per user interaction
/// the original screens offered.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Register { username: String, password: String },
    Login { username: String, password: String },
    Logout,
    Ingredients,
    SearchIngredients { query: String },
    AddIngredient { ingredient: Ingredient },
    EditIngredient { ingredient: Ingredient },
    RemoveIngredient { ingredient_id: String },
    Recipes,
    SearchRecipes { query: String },
    RecipeDetails { recipe_id: String },
    Theme { theme: AppTheme },
    SaveSettings,
}

impl Command {
    pub fn help_text() -> String {
        [
            "Supported commands:",
            "  register <username> <password>",
            "  login <username> <password>",
            "  logout",
            "  ingredients",
            "  search-ingredients <query>",
            "  add-ingredient <name> <category> <quantity> <unit> [expire-date]",
            "  edit-ingredient <name> <category> <quantity> <unit> [expire-date]",
            "  remove-ingredient <id>",
            "  recipes",
            "  search-recipes <query>",
            "  recipe <id>",
            "  theme <light|dark|foxy|darkocean>",
            "  save-settings",
            "  help",
            "  quit",
        ]
        .join("\n")
    }

    /// Parse one input line. `Err` carries the message to show the user;
    /// unknown or malformed input never aborts the loop.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(Command::help_text());
        };
        let args: Vec<&str> = words.collect();

        match name {
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "register" => match args.as_slice() {
                [username, password] => Ok(Command::Register {
                    username: (*username).to_string(),
                    password: (*password).to_string(),
                }),
                _ => Err(usage_line("register <username> <password>")),
            },
            "login" => match args.as_slice() {
                [username, password] => Ok(Command::Login {
                    username: (*username).to_string(),
                    password: (*password).to_string(),
                }),
                _ => Err(usage_line("login <username> <password>")),
            },
            "logout" => Ok(Command::Logout),
            "ingredients" => Ok(Command::Ingredients),
            "search-ingredients" => match args.as_slice() {
                [] => Err(usage_line("search-ingredients <query>")),
                words => Ok(Command::SearchIngredients { query: words.join(" ") }),
            },
            "add-ingredient" => parse_ingredient(&args)
                .map(|ingredient| Command::AddIngredient { ingredient })
                .map_err(|e| format!("{}\nUsage: add-ingredient <name> <category> <quantity> <unit> [expire-date]", e)),
            "edit-ingredient" => parse_ingredient(&args)
                .map(|ingredient| Command::EditIngredient { ingredient })
                .map_err(|e| format!("{}\nUsage: edit-ingredient <name> <category> <quantity> <unit> [expire-date]", e)),
            "remove-ingredient" => match args.as_slice() {
                [id] => Ok(Command::RemoveIngredient {
                    ingredient_id: (*id).to_string(),
                }),
                _ => Err(usage_line("remove-ingredient <id>")),
            },
            "recipes" => Ok(Command::Recipes),
            "search-recipes" => match args.as_slice() {
                [] => Err(usage_line("search-recipes <query>")),
                words => Ok(Command::SearchRecipes { query: words.join(" ") }),
            },
            "recipe" => match args.as_slice() {
                [id] => Ok(Command::RecipeDetails {
                    recipe_id: (*id).to_string(),
                }),
                _ => Err(usage_line("recipe <id>")),
            },
            "theme" => match args.as_slice() {
                [theme] => theme.parse::<AppTheme>().map(|theme| Command::Theme { theme }),
                _ => Err(usage_line("theme <light|dark|foxy|darkocean>")),
            },
            "save-settings" => Ok(Command::SaveSettings),
            other => Err(format!("Unknown command `{}`\n{}", other, Command::help_text())),
        }
    }
}

fn usage_line(usage: &str) -> String {
    format!("Usage: {}", usage)
}

fn parse_ingredient(args: &[&str]) -> Result<Ingredient, String> {
    let (name, category, quantity, unit, expire) = match args {
        [name, category, quantity, unit] => (name, category, quantity, unit, None),
        [name, category, quantity, unit, expire] => (name, category, quantity, unit, Some(*expire)),
        _ => return Err("Expected 4 or 5 arguments".to_string()),
    };

    let quantity: f32 = quantity
        .parse()
        .map_err(|_| format!("Invalid quantity `{}`", quantity))?;

    let expire_date = expire.map(parse_expire_date).transpose()?;

    Ok(Ingredient {
        name: (*name).to_string(),
        category: (*category).to_string(),
        quantity,
        unit: (*unit).to_string(),
        expire_date,
    })
}

fn parse_expire_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("Invalid date `{}` (YYYY-MM-DD)", raw))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("Invalid date `{}`", raw))?;
    Ok(DateTime::from_naive_utc_and_offset(midnight, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_parses() {
        let command = Command::parse("login bob hunter2").unwrap();
        assert_eq!(
            command,
            Command::Login {
                username: "bob".to_string(),
                password: "hunter2".to_string(),
            }
        );
    }

    #[test]
    fn multi_word_queries_are_joined() {
        let command = Command::parse("search-recipes chicken soup").unwrap();
        assert_eq!(
            command,
            Command::SearchRecipes {
                query: "chicken soup".to_string(),
            }
        );
    }

    #[test]
    fn add_ingredient_parses_with_and_without_date() {
        let command = Command::parse("add-ingredient Milk Dairy 1.5 L 2024-03-10").unwrap();
        let Command::AddIngredient { ingredient } = command else {
            panic!("expected AddIngredient");
        };
        assert_eq!(ingredient.name, "Milk");
        assert_eq!(ingredient.quantity, 1.5);
        assert!(ingredient.expire_date.is_some());

        let command = Command::parse("add-ingredient Salt Spices 1 Units").unwrap();
        let Command::AddIngredient { ingredient } = command else {
            panic!("expected AddIngredient");
        };
        assert_eq!(ingredient.expire_date, None);
    }

    #[test]
    fn malformed_input_reports_usage() {
        let error = Command::parse("login bob").unwrap_err();
        assert!(error.contains("login <username> <password>"));

        let error = Command::parse("add-ingredient Milk Dairy much L").unwrap_err();
        assert!(error.contains("Invalid quantity"));
    }

    #[test]
    fn unknown_command_reports_help() {
        let error = Command::parse("defrost").unwrap_err();
        assert!(error.contains("Unknown command `defrost`"));
        assert!(error.contains("Supported commands"));
    }
}
