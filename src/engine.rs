//! # Recipe Engine
//!
//! The recipe assembler: clamps request inputs, runs the pipeline
//! (normalize, classify, build, balance, narrate), and packs the result
//! into a [`Recipe`] record ready for display or export.
//!
//! Each generation request is a pure function of its explicit inputs plus
//! the injected randomness source; the engine holds no state beyond the
//! read-only rule tables.
//!
//! ## Usage
//!
//! ```rust
//! use pantrypilot::engine::{generate, RecipeRequest};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let request = RecipeRequest::new("rice, tomato, paneer, garlic");
//! let mut rng = StdRng::seed_from_u64(42);
//! let recipe = generate(&request, &mut rng).unwrap();
//! assert_eq!(recipe.servings, 2);
//! ```

use crate::balancer::balance_nutrition;
use crate::builder::build_ingredients;
use crate::classifier::{self, Cuisine, Diet, SpiceLevel};
use crate::ingredient::{Ingredient, NutritionSummary};
use crate::narrative::{self, Substitution};
use crate::normalizer::{normalize_items, MIN_TOKENS};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid cook-time range in minutes; requests are clamped into it.
pub const MINUTES_RANGE: (u32, u32) = (5, 180);
/// Valid serving range; requests are clamped into it.
pub const SERVINGS_RANGE: (u32, u32) = (1, 10);
/// Valid per-serving calorie-target range; requests are clamped into it.
pub const CALORIES_RANGE: (u32, u32) = (150, 1200);

/// Default cook time in minutes.
pub const DEFAULT_MINUTES: u32 = 25;
/// Default serving count.
pub const DEFAULT_SERVINGS: u32 = 2;
/// Default per-serving calorie target.
pub const DEFAULT_CALORIES: u32 = 450;

/// A recipe generation request. Numeric fields are clamped into their valid
/// ranges when the engine runs, so out-of-range values never reach the
/// rule tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Raw free-text ingredient list
    pub ingredients_text: String,
    /// Dietary constraint
    pub diet: Diet,
    /// Cuisine override; `None` means guess from the tokens
    pub cuisine: Option<Cuisine>,
    /// Cook time budget in minutes
    pub minutes: u32,
    /// Serving count
    pub servings: u32,
    /// Per-serving calorie target (kcal)
    pub target_calories: u32,
    /// Spice intensity
    pub spice: SpiceLevel,
}

impl RecipeRequest {
    /// Create a request with the default preferences.
    pub fn new(ingredients_text: &str) -> Self {
        Self {
            ingredients_text: ingredients_text.to_string(),
            diet: Diet::None,
            cuisine: None,
            minutes: DEFAULT_MINUTES,
            servings: DEFAULT_SERVINGS,
            target_calories: DEFAULT_CALORIES,
            spice: SpiceLevel::Medium,
        }
    }

    /// Set the dietary constraint.
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Force a cuisine instead of guessing from the tokens.
    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = Some(cuisine);
        self
    }

    /// Set the cook time budget in minutes.
    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    /// Set the serving count.
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Set the per-serving calorie target.
    pub fn with_target_calories(mut self, target_calories: u32) -> Self {
        self.target_calories = target_calories;
        self
    }

    /// Set the spice intensity.
    pub fn with_spice(mut self, spice: SpiceLevel) -> Self {
        self.spice = spice;
        self
    }
}

/// A generated recipe, immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display title
    pub title: String,
    /// Resolved cuisine
    pub cuisine: Cuisine,
    /// Cooking method from the time/cuisine table
    pub method: String,
    /// Serving count (clamped to 1..=10)
    pub servings: u32,
    /// Cook time in minutes (clamped to 5..=180)
    pub minutes: u32,
    /// Balanced ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps
    pub steps: Vec<String>,
    /// Totals and per-serving macros
    pub nutrition: NutritionSummary,
    /// Substitution suggestions from the rule table
    pub substitutions: Vec<Substitution>,
    /// Cooking tips
    pub tips: Vec<String>,
    /// Balancer adjustment note, when the tolerance band was exceeded
    pub balance_note: Option<String>,
}

/// Rejection results from recipe generation.
///
/// These are corrective-message conditions for the caller, not faults; all
/// other inputs are clamped or defaulted rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Fewer than [`MIN_TOKENS`] ingredient tokens were supplied.
    InsufficientIngredients {
        /// How many normalized tokens the input produced
        found: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InsufficientIngredients { found } => write!(
                f,
                "insufficient ingredients: got {found}, need at least {MIN_TOKENS}"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate a recipe from a request and a randomness source.
///
/// Runs the full pipeline: normalize, classify, build ingredients, balance
/// nutrition, generate narrative, assemble. Rejects with
/// [`GenerateError::InsufficientIngredients`] when fewer than three tokens
/// result from normalization.
pub fn generate<R: Rng + ?Sized>(
    request: &RecipeRequest,
    rng: &mut R,
) -> Result<Recipe, GenerateError> {
    let minutes = request.minutes.clamp(MINUTES_RANGE.0, MINUTES_RANGE.1);
    let servings = request.servings.clamp(SERVINGS_RANGE.0, SERVINGS_RANGE.1);
    let target_calories = request
        .target_calories
        .clamp(CALORIES_RANGE.0, CALORIES_RANGE.1);

    let tokens = normalize_items(&request.ingredients_text);
    if tokens.len() < MIN_TOKENS {
        debug!("Rejecting request with {} tokens", tokens.len());
        return Err(GenerateError::InsufficientIngredients {
            found: tokens.len(),
        });
    }

    let cuisine = request
        .cuisine
        .unwrap_or_else(|| classifier::guess_cuisine(&tokens));
    let main = classifier::pick_main_ingredient(&tokens, request.diet);
    let method = classifier::cooking_method(minutes, cuisine);

    let base = build_ingredients(&tokens, servings, cuisine, request.spice, rng);
    let balanced = balance_nutrition(base, servings, target_calories, request.diet);
    let nutrition = NutritionSummary::compute(&balanced.ingredients, servings);

    let steps = narrative::generate_steps(&main, cuisine, method, minutes, request.spice);
    let substitutions = narrative::substitutions(&tokens, request.diet);
    let tips = narrative::tips(&tokens, minutes);
    let title = narrative::generate_title(&main, cuisine, rng);

    info!(
        "Generated '{}' ({} cuisine, {} ingredients, {:.0} kcal/serving)",
        title,
        cuisine,
        balanced.ingredients.len(),
        nutrition.per_serving.calories
    );

    Ok(Recipe {
        title,
        cuisine,
        method: method.to_string(),
        servings,
        minutes,
        ingredients: balanced.ingredients,
        steps,
        nutrition,
        substitutions,
        tips,
        balance_note: balanced.note,
    })
}
