//! Generate a few sample recipes with a seeded randomness source and print
//! their text exports.

use pantrypilot::classifier::{Cuisine, Diet, SpiceLevel};
use pantrypilot::engine::{generate, RecipeRequest};
use pantrypilot::export::recipe_to_text;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let samples = [
        RecipeRequest::new("rice, tomato, onion, paneer, spinach, garlic, cumin, turmeric, ginger")
            .with_diet(Diet::Vegetarian)
            .with_cuisine(Cuisine::Indian)
            .with_minutes(25)
            .with_target_calories(450),
        RecipeRequest::new("pasta, tomato, garlic, onion, mushroom, olive oil, cheese")
            .with_cuisine(Cuisine::Italian)
            .with_minutes(20)
            .with_target_calories(520)
            .with_spice(SpiceLevel::Mild),
        RecipeRequest::new("tofu, rice, garlic, ginger, capsicum, carrot, onion, soy sauce")
            .with_diet(Diet::Vegan)
            .with_cuisine(Cuisine::Chinese)
            .with_minutes(18)
            .with_target_calories(420)
            .with_spice(SpiceLevel::Hot),
        RecipeRequest::new("chickpeas, tomato, onion, lemon, olive oil, spinach, garlic")
            .with_diet(Diet::Vegan)
            .with_cuisine(Cuisine::Mediterranean)
            .with_minutes(28)
            .with_target_calories(380)
            .with_spice(SpiceLevel::Mild),
    ];

    let mut rng = StdRng::seed_from_u64(2024);
    for request in &samples {
        match generate(request, &mut rng) {
            Ok(recipe) => println!("{}\n\n{}\n", recipe_to_text(&recipe), "=".repeat(60)),
            Err(err) => eprintln!("Generation failed: {err}"),
        }
    }
}
