//! # Nutrition Balancer
//!
//! Adjusts a synthesized ingredient list so per-serving calories approach a
//! target. Within the ±50 kcal/serving tolerance band the list passes
//! through untouched. A deficit appends one calorie-dense top-up
//! ingredient; a surplus trims only the first ingredient by a fixed 20%.
//!
//! This is a single-pass heuristic, not an optimizer: it does not iterate
//! to convergence and may leave the result outside tolerance after one
//! correction. That is accepted behavior.

use crate::classifier::Diet;
use crate::ingredient::{Ingredient, MacroTotals, Quantity};
use log::debug;

/// Tolerance band in kcal per serving; no adjustment inside it.
pub const TOLERANCE_KCAL: f64 = 50.0;

/// Outcome of balancing: the (possibly adjusted) list and a human-readable
/// note, populated exactly when the tolerance band was exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    /// Ordered ingredient list, adjusted when outside tolerance
    pub ingredients: Vec<Ingredient>,
    /// Adjustment note, `None` when no adjustment was needed
    pub note: Option<String>,
}

/// Balance per-serving calories toward the target.
pub fn balance_nutrition(
    ingredients: Vec<Ingredient>,
    servings: u32,
    target_calories: u32,
    diet: Diet,
) -> BalanceResult {
    let per_serving = MacroTotals::from_ingredients(&ingredients)
        .divided_by(servings)
        .calories;
    let target = f64::from(target_calories);
    let diff = target - per_serving;

    if diff.abs() < TOLERANCE_KCAL {
        debug!(
            "Per-serving calories {:.0} within tolerance of target {}",
            per_serving, target_calories
        );
        return BalanceResult {
            ingredients,
            note: None,
        };
    }

    if diff > 0.0 {
        append_top_up(ingredients, servings, target_calories, diet, diff)
    } else {
        trim_first_ingredient(ingredients, target_calories)
    }
}

// Deficit: add a single calorie-dense ingredient worth half the gap.
fn append_top_up(
    mut ingredients: Vec<Ingredient>,
    servings: u32,
    target_calories: u32,
    diet: Diet,
    deficit: f64,
) -> BalanceResult {
    let name = if diet == Diet::Vegan { "nuts" } else { "butter" };
    let extra = Ingredient::new(name, Quantity::grams((f64::from(servings) * 5.0).round()))
        .with_macros(
            (deficit * 0.5).round(),
            2.0,
            1.0,
            (deficit * 0.05).round(),
        );

    debug!(
        "Calorie deficit {:.0}/serving, adding {} {}",
        deficit, extra.quantity, name
    );
    let note = format!(
        "Added {} {} to reach ~{} kcal/serving",
        extra.quantity, extra.name, target_calories
    );
    ingredients.push(extra);

    BalanceResult {
        ingredients,
        note: Some(note),
    }
}

// Surplus: scale only the first ingredient's calories and quantity by 0.8.
// Deliberately not a proportional reduction across the list; changing this
// changes observable output.
fn trim_first_ingredient(mut ingredients: Vec<Ingredient>, target_calories: u32) -> BalanceResult {
    if let Some(first) = ingredients.first_mut() {
        first.calories = (first.calories * 0.8).round();
        first.quantity = first.quantity.scaled(0.8);
        debug!("Calorie surplus, trimmed first ingredient to {}", first.quantity);
    }

    BalanceResult {
        ingredients,
        note: Some(format!(
            "Reduced portions to target ~{} kcal/serving",
            target_calories
        )),
    }
}
