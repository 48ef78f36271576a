//! # Daily Nutrition Tracker
//!
//! A per-day nutrition log: four meal slots of food items, meal and daily
//! macro totals, progress against daily targets, and calorie-derived
//! micronutrient estimates. All derivation is pure; persistence of the log
//! lives in [`crate::storage`].

use crate::ingredient::MacroTotals;
use chrono::{Duration, NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// The four meal slots of a daily log, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snacks
    Snacks,
}

impl MealType {
    /// All meal slots in display order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
    ];

    /// Lowercase slot name, as used in storage keys and displays.
    pub fn name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
        }
    }
}

/// One logged food item with its macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name as entered
    pub name: String,
    /// Amount in the item's unit
    pub quantity: f64,
    /// Unit label (e.g. "g", "cup", "piece")
    pub unit: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fats (grams)
    pub fats: f64,
}

/// A day's food log across the four meal slots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyLog {
    /// Breakfast items
    #[serde(default)]
    pub breakfast: Vec<FoodItem>,
    /// Lunch items
    #[serde(default)]
    pub lunch: Vec<FoodItem>,
    /// Dinner items
    #[serde(default)]
    pub dinner: Vec<FoodItem>,
    /// Snack items
    #[serde(default)]
    pub snacks: Vec<FoodItem>,
}

impl DailyLog {
    /// Items in one meal slot.
    pub fn items(&self, meal: MealType) -> &[FoodItem] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snacks => &self.snacks,
        }
    }

    fn items_mut(&mut self, meal: MealType) -> &mut Vec<FoodItem> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snacks => &mut self.snacks,
        }
    }

    /// Append a food item to a meal slot.
    pub fn add_item(&mut self, meal: MealType, item: FoodItem) {
        debug!("Adding '{}' to {}", item.name, meal.name());
        self.items_mut(meal).push(item);
    }

    /// Remove the item at `index` from a meal slot. Out-of-range indexes
    /// are a no-op returning `None`.
    pub fn remove_item(&mut self, meal: MealType, index: usize) -> Option<FoodItem> {
        let items = self.items_mut(meal);
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Macro totals for one meal slot.
    pub fn meal_totals(&self, meal: MealType) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for item in self.items(meal) {
            totals.add(item.calories, item.protein, item.carbs, item.fats);
        }
        totals
    }

    /// Macro totals across all four meal slots.
    pub fn daily_totals(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for meal in MealType::ALL {
            let m = self.meal_totals(meal);
            totals.add(m.calories, m.protein, m.carbs, m.fats);
        }
        totals
    }
}

/// Daily macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Calorie target (kcal)
    pub calories: f64,
    /// Protein target (grams)
    pub protein: f64,
    /// Carbohydrate target (grams)
    pub carbs: f64,
    /// Fat target (grams)
    pub fats: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fats: 65.0,
        }
    }
}

/// Daily micronutrient targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicroTargets {
    /// Vitamin A (mcg)
    pub vitamin_a: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Fiber (g)
    pub fiber: f64,
}

impl Default for MicroTargets {
    fn default() -> Self {
        Self {
            vitamin_a: 900.0,
            vitamin_c: 90.0,
            calcium: 1000.0,
            iron: 18.0,
            potassium: 3500.0,
            fiber: 30.0,
        }
    }
}

/// Micronutrient estimates derived from macro totals. These are coarse
/// linear estimates of intake, not measured values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MicroEstimates {
    /// Estimated vitamin A (mcg)
    pub vitamin_a: f64,
    /// Estimated vitamin C (mg)
    pub vitamin_c: f64,
    /// Estimated calcium (mg)
    pub calcium: f64,
    /// Estimated iron (mg)
    pub iron: f64,
    /// Estimated potassium (mg)
    pub potassium: f64,
    /// Estimated fiber (g)
    pub fiber: f64,
}

/// Estimate micronutrients from a day's macro totals.
pub fn estimate_micros(totals: &MacroTotals) -> MicroEstimates {
    MicroEstimates {
        vitamin_a: totals.calories * 0.45,
        vitamin_c: totals.calories * 0.045,
        calcium: totals.calories * 0.5,
        iron: totals.calories * 0.009,
        potassium: totals.calories * 1.75,
        fiber: totals.carbs * 0.12,
    }
}

/// Progress toward a target as a display percentage, capped at 100.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    ((current / target) * 100.0).min(100.0)
}

/// Today's date in UTC, the default log date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The day before `date`.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// The day after `date`.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date + Duration::days(1)
}
