//! # Ingredient Builder
//!
//! Synthesizes a quantified ingredient list from normalized tokens. Gram
//! quantities are a function of the serving count; the four macro estimates
//! are independent uniform draws within fixed bounds, so re-running with
//! identical inputs yields different values. The randomness source is an
//! explicit parameter so tests can seed it.

use crate::classifier::{Cuisine, SpiceLevel};
use crate::ingredient::{Ingredient, Quantity};
use log::debug;
use rand::Rng;

/// At most this many tokens become ingredients; excess tokens are silently
/// dropped. The cap keeps recipes presentable, it is not a nutrition limit.
pub const MAX_ITEMS: usize = 8;

// Uniform macro jitter bounds per synthesized ingredient.
const CALORIES_RANGE: (f64, f64) = (40.0, 100.0);
const PROTEIN_RANGE: (f64, f64) = (2.0, 10.0);
const CARBS_RANGE: (f64, f64) = (5.0, 20.0);
const FATS_RANGE: (f64, f64) = (1.0, 6.0);

/// Build the ingredient list for a recipe.
///
/// Takes up to the first [`MAX_ITEMS`] tokens in order. When the cuisine is
/// Indian and no `spices` token was supplied, a fixed `garam masala`
/// ingredient is appended, scaled by the spice-level multiplier.
pub fn build_ingredients<R: Rng + ?Sized>(
    tokens: &[String],
    servings: u32,
    cuisine: Cuisine,
    spice: SpiceLevel,
    rng: &mut R,
) -> Vec<Ingredient> {
    let selected = &tokens[..tokens.len().min(MAX_ITEMS)];
    debug!(
        "Building {} ingredients for {} servings ({} cuisine)",
        selected.len(),
        servings,
        cuisine
    );

    let grams = portion_grams(servings);
    let mut ingredients: Vec<Ingredient> = selected
        .iter()
        .map(|token| {
            Ingredient::new(token, Quantity::grams(grams)).with_macros(
                rng.gen_range(CALORIES_RANGE.0..CALORIES_RANGE.1),
                rng.gen_range(PROTEIN_RANGE.0..PROTEIN_RANGE.1),
                rng.gen_range(CARBS_RANGE.0..CARBS_RANGE.1),
                rng.gen_range(FATS_RANGE.0..FATS_RANGE.1),
            )
        })
        .collect();

    if cuisine == Cuisine::Indian && !tokens.iter().any(|t| t == "spices") {
        let masala_grams = (f64::from(servings) * 1.5 * spice.multiplier()).round();
        ingredients.push(
            Ingredient::new("garam masala", Quantity::grams(masala_grams))
                .with_macros(10.0, 0.5, 2.0, 0.5),
        );
    }

    ingredients
}

// Two linear portion formulas, selected by the serving count.
fn portion_grams(servings: u32) -> f64 {
    let s = f64::from(servings);
    if servings > 2 {
        (100.0 + s * 20.0).round()
    } else {
        (80.0 + s * 15.0).round()
    }
}
