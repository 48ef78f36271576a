//! # PantryPilot CLI
//!
//! Generates one recipe from the command line and prints the plain-text
//! export. Ingredients come from the arguments (joined) or, when absent,
//! from stdin; preferences come from environment variables.

use anyhow::Result;
use log::info;
use pantrypilot::classifier::{Cuisine, Diet, SpiceLevel};
use pantrypilot::engine::{self, generate, GenerateError, RecipeRequest};
use pantrypilot::export::recipe_to_text;
use pantrypilot::storage::{self, Storage};
use std::env;
use std::io::Read;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting PantryPilot recipe generator");

    let ingredients_text = read_ingredients()?;

    let request = RecipeRequest::new(&ingredients_text)
        .with_diet(Diet::parse(&env_or("PANTRY_DIET", "none")))
        .with_minutes(env_number("PANTRY_MINUTES", engine::DEFAULT_MINUTES))
        .with_servings(env_number("PANTRY_SERVINGS", engine::DEFAULT_SERVINGS))
        .with_target_calories(env_number("PANTRY_CALORIES", engine::DEFAULT_CALORIES))
        .with_spice(SpiceLevel::parse(&env_or("PANTRY_SPICE", "medium")));
    let request = match Cuisine::parse_selection(&env_or("PANTRY_CUISINE", "auto")) {
        Some(cuisine) => request.with_cuisine(cuisine),
        None => request,
    };

    let mut rng = rand::thread_rng();
    let recipe = match generate(&request, &mut rng) {
        Ok(recipe) => recipe,
        Err(GenerateError::InsufficientIngredients { found }) => {
            eprintln!(
                "Please add at least 3 ingredients (got {found}). \
                 Separate them with commas, semicolons, or newlines."
            );
            std::process::exit(1);
        }
    };

    println!("{}", recipe_to_text(&recipe));

    // Save the recipe when a data directory and user are configured.
    if let (Ok(data_dir), Ok(user_id)) = (env::var("PANTRY_DATA_DIR"), env::var("PANTRY_USER")) {
        let store = Storage::open(&data_dir)?;
        storage::save_recipe(&store, &user_id, &recipe)?;
        println!("\nSaved to {} for user {}", data_dir, user_id);
    }

    Ok(())
}

// Ingredient text: arguments joined with ", ", or stdin when none given.
fn read_ingredients() -> Result<String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(", "));
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_number(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
