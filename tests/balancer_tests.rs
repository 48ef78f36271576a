#[cfg(test)]
mod tests {
    use pantrypilot::balancer::{balance_nutrition, TOLERANCE_KCAL};
    use pantrypilot::classifier::Diet;
    use pantrypilot::ingredient::{Ingredient, MacroTotals, Quantity};

    fn item(name: &str, grams: f64, calories: f64) -> Ingredient {
        Ingredient::new(name, Quantity::grams(grams)).with_macros(calories, 4.0, 12.0, 3.0)
    }

    fn per_serving_calories(ingredients: &[Ingredient], servings: u32) -> f64 {
        MacroTotals::from_ingredients(ingredients)
            .divided_by(servings)
            .calories
    }

    #[test]
    fn test_idempotence_inside_tolerance_band() {
        // 860 kcal over 2 servings = 430/serving, within 50 of 450.
        let list = vec![item("rice", 110.0, 500.0), item("dal", 110.0, 360.0)];
        let result = balance_nutrition(list.clone(), 2, 450, Diet::None);
        assert_eq!(result.ingredients, list);
        assert!(result.note.is_none());
    }

    #[test]
    fn test_deficit_correction_arithmetic() {
        // Total 300 kcal, 2 servings, target 450: deficit is 300/serving.
        let list = vec![item("rice", 110.0, 180.0), item("dal", 110.0, 120.0)];
        let before = per_serving_calories(&list, 2);
        let deficit = 450.0 - before;
        assert!(deficit >= TOLERANCE_KCAL);

        let result = balance_nutrition(list, 2, 450, Diet::None);
        let added = result.ingredients.last().unwrap();
        assert_eq!(added.calories, (deficit * 0.5).round());
        assert_eq!(added.fats, (deficit * 0.05).round());
        assert!(!result.note.as_deref().unwrap().is_empty());
    }

    #[test]
    fn test_surplus_scales_first_by_exactly_point_eight() {
        let list = vec![
            item("rice", 160.0, 640.0),
            item("dal", 110.0, 420.0),
            item("ghee", 20.0, 360.0),
        ];
        let result = balance_nutrition(list.clone(), 2, 450, Diet::None);

        assert_eq!(result.ingredients[0].calories, (640.0f64 * 0.8).round());
        assert_eq!(result.ingredients[0].quantity.grams, 128.0);
        for i in 1..list.len() {
            assert_eq!(result.ingredients[i], list[i]);
        }
        assert_eq!(result.ingredients.len(), list.len());
    }

    #[test]
    fn test_empty_list_deficit_still_tops_up() {
        // Degenerate input degrades gracefully instead of failing: zero
        // calories is a plain deficit.
        let result = balance_nutrition(Vec::new(), 2, 450, Diet::None);
        assert_eq!(result.ingredients.len(), 1);
        assert_eq!(result.ingredients[0].name, "butter");
        assert_eq!(result.ingredients[0].calories, 225.0);
    }

    #[test]
    fn test_note_quotes_target_and_quantity() {
        let list = vec![item("rice", 110.0, 100.0)];
        let result = balance_nutrition(list, 4, 600, Diet::Vegan);
        assert_eq!(
            result.note.unwrap(),
            "Added 20g nuts to reach ~600 kcal/serving"
        );
    }
}
