#[cfg(test)]
mod tests {
    use pantrypilot::classifier::{Cuisine, Diet, SpiceLevel};
    use pantrypilot::engine::{generate, GenerateError, RecipeRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_rejection_below_three_tokens() {
        let result = generate(&RecipeRequest::new("a, b"), &mut rng(1));
        assert_eq!(
            result.unwrap_err(),
            GenerateError::InsufficientIngredients { found: 2 }
        );
    }

    #[test]
    fn test_three_tokens_proceed() {
        let recipe = generate(&RecipeRequest::new("a, b, c"), &mut rng(1)).unwrap();
        assert!(recipe.ingredients.len() >= 3);
    }

    #[test]
    fn test_per_serving_equals_total_divided_by_servings() {
        for servings in [1, 2, 5, 10] {
            let request = RecipeRequest::new("rice, tomato, onion, garlic, spinach")
                .with_servings(servings);
            let recipe = generate(&request, &mut rng(u64::from(servings))).unwrap();
            let total = recipe.nutrition.total;
            let per = recipe.nutrition.per_serving;
            let s = f64::from(servings);
            assert!((per.calories - total.calories / s).abs() < 1e-9);
            assert!((per.protein - total.protein / s).abs() < 1e-9);
            assert!((per.carbs - total.carbs / s).abs() < 1e-9);
            assert!((per.fats - total.fats / s).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cuisine_priority_indian_over_italian() {
        let recipe = generate(&RecipeRequest::new("curry, basil, rice"), &mut rng(5)).unwrap();
        assert_eq!(recipe.cuisine, Cuisine::Indian);
    }

    #[test]
    fn test_method_from_time_and_cuisine() {
        let short = RecipeRequest::new("curry, rice, onion").with_minutes(10);
        assert_eq!(generate(&short, &mut rng(1)).unwrap().method, "tawa");

        let medium = RecipeRequest::new("soy sauce, rice, onion").with_minutes(25);
        assert_eq!(generate(&medium, &mut rng(1)).unwrap().method, "pan cook");
    }

    #[test]
    fn test_same_seed_same_recipe() {
        let request = RecipeRequest::new("paneer, rice, tomato, garlic")
            .with_diet(Diet::Vegetarian)
            .with_spice(SpiceLevel::Hot);
        let a = generate(&request, &mut rng(99)).unwrap();
        let b = generate(&request, &mut rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_invocations_jitter_macros() {
        // Macro synthesis is intentionally nondeterministic across draws
        // from the same stream.
        let request = RecipeRequest::new("rice, tomato, onion");
        let mut r = rng(7);
        let a = generate(&request, &mut r).unwrap();
        let b = generate(&request, &mut r).unwrap();
        assert_ne!(
            a.ingredients[0].calories, b.ingredients[0].calories,
            "independent draws should differ"
        );
    }

    #[test]
    fn test_macros_are_non_negative() {
        let request = RecipeRequest::new("rice, tomato, onion, garlic, paneer, spinach")
            .with_target_calories(1200);
        let recipe = generate(&request, &mut rng(3)).unwrap();
        for ing in &recipe.ingredients {
            assert!(ing.calories >= 0.0);
            assert!(ing.protein >= 0.0);
            assert!(ing.carbs >= 0.0);
            assert!(ing.fats >= 0.0);
        }
    }

    #[test]
    fn test_indian_recipe_gets_garam_masala() {
        let recipe =
            generate(&RecipeRequest::new("curry, rice, onion"), &mut rng(1)).unwrap();
        assert!(recipe.ingredients.iter().any(|i| i.name == "garam masala"));
    }

    #[test]
    fn test_balance_note_accompanies_adjustment() {
        // Eight ingredients at most 100 kcal each across 1 serving cannot
        // reach a 1200 kcal target, so the balancer must act and note it.
        let request = RecipeRequest::new("a, b, c")
            .with_servings(1)
            .with_target_calories(1200);
        let recipe = generate(&request, &mut rng(8)).unwrap();
        assert!(recipe.balance_note.is_some());
        let last = recipe.ingredients.last().unwrap();
        assert_eq!(last.name, "butter");
    }

    #[test]
    fn test_vegan_top_up_is_nuts() {
        let request = RecipeRequest::new("a, b, c")
            .with_servings(1)
            .with_target_calories(1200)
            .with_diet(Diet::Vegan);
        let recipe = generate(&request, &mut rng(8)).unwrap();
        assert_eq!(recipe.ingredients.last().unwrap().name, "nuts");
    }

    #[test]
    fn test_substitutions_flow_through() {
        let request =
            RecipeRequest::new("chicken, rice, onion").with_diet(Diet::Vegetarian);
        let recipe = generate(&request, &mut rng(2)).unwrap();
        assert_eq!(recipe.substitutions.len(), 1);
        assert_eq!(recipe.substitutions[0].from, "chicken");
    }

    #[test]
    fn test_recipe_serde_round_trip() {
        let recipe = generate(
            &RecipeRequest::new("paneer, rice, tomato, garlic"),
            &mut rng(42),
        )
        .unwrap();
        let json = serde_json::to_string(&recipe).unwrap();
        let back: pantrypilot::engine::Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_title_starts_with_main_ingredient() {
        let request = RecipeRequest::new("tofu, rice, carrot").with_diet(Diet::Vegan);
        let recipe = generate(&request, &mut rng(6)).unwrap();
        assert!(recipe.title.starts_with("Tofu "));
    }
}
