//! # Recipe Text Export
//!
//! Renders a [`Recipe`] into the clipboard-friendly plain-text form: title,
//! a metadata line, ingredient and step lists, the per-serving nutrition
//! block, substitutions (only when present), and tips.

use crate::engine::Recipe;
use crate::normalizer::title_case;
use std::fmt::Write;

/// Render a recipe as clipboard-friendly plain text.
pub fn recipe_to_text(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(
        out,
        "Cuisine: {} | Method: {} | Time: {} min | Servings: {}",
        recipe.cuisine, recipe.method, recipe.minutes, recipe.servings
    );

    let _ = writeln!(out, "\nIngredients:");
    for ing in &recipe.ingredients {
        let _ = writeln!(out, "- {} — {}", title_case(&ing.name), ing.quantity);
    }

    let _ = writeln!(out, "\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    let per = &recipe.nutrition.per_serving;
    let _ = writeln!(out, "\nNutrition (per serving):");
    let _ = writeln!(out, "Calories: {} kcal", per.calories.round() as i64);
    let _ = writeln!(
        out,
        "Protein: {:.1}g | Carbs: {:.1}g | Fats: {:.1}g",
        per.protein, per.carbs, per.fats
    );

    if !recipe.substitutions.is_empty() {
        let _ = writeln!(out, "\nSubstitutions:");
        for sub in &recipe.substitutions {
            let _ = writeln!(
                out,
                "- {} → {} ({})",
                title_case(&sub.from),
                title_case(&sub.to),
                sub.reason
            );
        }
    }

    let _ = writeln!(out, "\nTips:");
    for tip in &recipe.tips {
        let _ = writeln!(out, "- {}", tip);
    }

    out.trim_end().to_string()
}
