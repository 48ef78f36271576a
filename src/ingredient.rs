//! # Ingredient and Nutrition Data Model
//!
//! Defines the quantified ingredient record produced by the builder, the
//! macro totals shared between the recipe engine and the daily nutrition
//! log, and per-serving nutrition summaries.
//!
//! ## Core Concepts
//!
//! - **Ingredient**: a named item with a gram quantity and four macro
//!   estimates (calories, protein, carbs, fats)
//! - **MacroTotals**: the sum of macros across a list; derived, never
//!   stored independently
//! - **NutritionSummary**: totals plus the per-serving division
//!
//! ## Usage
//!
//! ```rust
//! use pantrypilot::ingredient::{Ingredient, NutritionSummary, Quantity};
//!
//! let rice = Ingredient::new("rice", Quantity::grams(120.0))
//!     .with_macros(80.0, 3.0, 18.0, 1.0);
//! let summary = NutritionSummary::compute(&[rice], 2);
//! assert_eq!(summary.per_serving.calories, 40.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gram quantity, displayed as a rounded grams string (e.g. `"120g"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Amount in grams
    pub grams: f64,
}

impl Quantity {
    /// Create a quantity from grams.
    pub fn grams(grams: f64) -> Self {
        Self { grams }
    }

    /// Scale the quantity by a factor, rounding to whole grams.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            grams: (self.grams * factor).round(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.grams.round() as i64)
    }
}

/// A synthesized recipe ingredient with quantity and macro estimates.
///
/// Macro values for a given name vary per invocation (random jitter within
/// fixed bounds); synthesis is intentionally not an idempotent mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Lowercase ingredient name
    pub name: String,
    /// Quantity in grams
    pub quantity: Quantity,
    /// Estimated calories (kcal), non-negative
    pub calories: f64,
    /// Estimated protein (grams), non-negative
    pub protein: f64,
    /// Estimated carbohydrates (grams), non-negative
    pub carbs: f64,
    /// Estimated fats (grams), non-negative
    pub fats: f64,
}

impl Ingredient {
    /// Create an ingredient with zeroed macros.
    pub fn new(name: &str, quantity: Quantity) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    }

    /// Set all four macro estimates.
    pub fn with_macros(mut self, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.carbs = carbs;
        self.fats = fats;
        self
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Macro totals summed across a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein: f64,
    /// Total carbohydrates (grams)
    pub carbs: f64,
    /// Total fats (grams)
    pub fats: f64,
}

impl MacroTotals {
    /// Accumulate one item's macros into the totals.
    pub fn add(&mut self, calories: f64, protein: f64, carbs: f64, fats: f64) {
        self.calories += calories;
        self.protein += protein;
        self.carbs += carbs;
        self.fats += fats;
    }

    /// Sum the macros of an ingredient list.
    pub fn from_ingredients(ingredients: &[Ingredient]) -> Self {
        let mut totals = MacroTotals::default();
        for ing in ingredients {
            totals.add(ing.calories, ing.protein, ing.carbs, ing.fats);
        }
        totals
    }

    /// Divide every macro by a serving count.
    pub fn divided_by(&self, servings: u32) -> Self {
        let divisor = f64::from(servings.max(1));
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fats: self.fats / divisor,
        }
    }
}

/// Recipe nutrition: list totals and the per-serving division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    /// Totals across the whole ingredient list
    pub total: MacroTotals,
    /// Totals divided by the serving count
    pub per_serving: MacroTotals,
}

impl NutritionSummary {
    /// Compute totals and per-serving macros for an ingredient list.
    pub fn compute(ingredients: &[Ingredient], servings: u32) -> Self {
        let total = MacroTotals::from_ingredients(ingredients);
        Self {
            total,
            per_serving: total.divided_by(servings),
        }
    }
}
