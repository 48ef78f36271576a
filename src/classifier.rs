//! # Cuisine and Ingredient Classifier
//!
//! Infers a cuisine and a main ingredient from normalized tokens, and looks
//! up a cooking method from the time budget. All inference runs over
//! explicit priority-ordered tables: the first matching entry wins and
//! evaluation short-circuits, so priority and fallback behavior are
//! auditable in isolation.
//!
//! ## Usage
//!
//! ```rust
//! use pantrypilot::classifier::{guess_cuisine, Cuisine};
//!
//! let tokens = vec!["curry".to_string(), "basil".to_string()];
//! // Indian outranks Italian in the signature table.
//! assert_eq!(guess_cuisine(&tokens), Cuisine::Indian);
//! ```

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported cuisines. `Fusion` is the fallback when no signature matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    /// Indian
    Indian,
    /// Italian
    Italian,
    /// Chinese
    Chinese,
    /// Mexican
    Mexican,
    /// Mediterranean
    Mediterranean,
    /// Thai
    Thai,
    /// Fusion (fallback)
    Fusion,
}

impl Cuisine {
    /// Lowercase display name, as used in exports and persisted recipes.
    pub fn name(&self) -> &'static str {
        match self {
            Cuisine::Indian => "indian",
            Cuisine::Italian => "italian",
            Cuisine::Chinese => "chinese",
            Cuisine::Mexican => "mexican",
            Cuisine::Mediterranean => "mediterranean",
            Cuisine::Thai => "thai",
            Cuisine::Fusion => "fusion",
        }
    }

    /// Parse a cuisine selection. `"auto"` (or anything unrecognized)
    /// yields `None`, meaning the signature table decides.
    pub fn parse_selection(value: &str) -> Option<Cuisine> {
        match value.trim().to_lowercase().as_str() {
            "indian" => Some(Cuisine::Indian),
            "italian" => Some(Cuisine::Italian),
            "chinese" => Some(Cuisine::Chinese),
            "mexican" => Some(Cuisine::Mexican),
            "mediterranean" => Some(Cuisine::Mediterranean),
            "thai" => Some(Cuisine::Thai),
            "fusion" => Some(Cuisine::Fusion),
            _ => None,
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dietary constraint applied to ingredient selection and substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// No restriction
    None,
    /// Vegetarian
    Vegetarian,
    /// Vegan
    Vegan,
    /// Gluten-free
    GlutenFree,
}

impl Diet {
    /// Parse a diet selection; unrecognized values mean no restriction.
    pub fn parse(value: &str) -> Diet {
        match value.trim().to_lowercase().as_str() {
            "vegetarian" => Diet::Vegetarian,
            "vegan" => Diet::Vegan,
            "glutenfree" | "gluten-free" => Diet::GlutenFree,
            _ => Diet::None,
        }
    }
}

/// Requested spice intensity, scaling the quantity of added spices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiceLevel {
    /// Mild
    Mild,
    /// Medium (default)
    Medium,
    /// Hot
    Hot,
}

impl SpiceLevel {
    /// Quantity multiplier applied to added spice ingredients.
    pub fn multiplier(&self) -> f64 {
        match self {
            SpiceLevel::Mild => 0.6,
            SpiceLevel::Medium => 1.0,
            SpiceLevel::Hot => 1.5,
        }
    }

    /// Parse a spice selection; unrecognized values fall back to medium.
    pub fn parse(value: &str) -> SpiceLevel {
        match value.trim().to_lowercase().as_str() {
            "mild" => SpiceLevel::Mild,
            "hot" => SpiceLevel::Hot,
            _ => SpiceLevel::Medium,
        }
    }
}

lazy_static! {
    /// Cuisine signatures in priority order. The first cuisine whose marker
    /// set intersects the token set wins; only membership matters, not count.
    static ref CUISINE_SIGNATURES: Vec<(Cuisine, &'static [&'static str])> = vec![
        (Cuisine::Indian, &["paneer", "turmeric", "cumin", "curry"][..]),
        (Cuisine::Italian, &["pasta", "basil", "parmesan", "mozzarella"][..]),
        (Cuisine::Chinese, &["soy sauce", "ginger", "sesame"][..]),
        (Cuisine::Mexican, &["lime", "cilantro", "tortilla"][..]),
        (Cuisine::Mediterranean, &["olive oil", "feta", "lemon"][..]),
    ];
}

// Protein pools in priority order; pool order is itself a ranking.
const PROTEINS: &[&str] = &[
    "chicken", "paneer", "tofu", "fish", "beef", "pork", "chickpeas", "lentils", "egg", "shrimp",
];
const VEGGIE_PROTEINS: &[&str] = &["paneer", "tofu", "chickpeas", "lentils", "mushroom"];
const VEGAN_PROTEINS: &[&str] = &["tofu", "chickpeas", "lentils", "tempeh"];

/// Main-ingredient fallback when the token list is empty.
const FALLBACK_MAIN: &str = "vegetables";

/// Guess a cuisine from normalized tokens using the signature table.
///
/// Falls back to [`Cuisine::Fusion`] when no signature matches.
pub fn guess_cuisine(tokens: &[String]) -> Cuisine {
    for (cuisine, markers) in CUISINE_SIGNATURES.iter() {
        if markers.iter().any(|m| tokens.iter().any(|t| t == m)) {
            debug!("Cuisine signature matched: {}", cuisine);
            return *cuisine;
        }
    }
    debug!("No cuisine signature matched, falling back to fusion");
    Cuisine::Fusion
}

/// Pick the main ingredient: the first entry of the diet's protein pool
/// present in the tokens, else the first token, else `"vegetables"`.
pub fn pick_main_ingredient(tokens: &[String], diet: Diet) -> String {
    let pool = match diet {
        Diet::Vegetarian => VEGGIE_PROTEINS,
        Diet::Vegan => VEGAN_PROTEINS,
        _ => PROTEINS,
    };

    for protein in pool {
        if tokens.iter().any(|t| t == protein) {
            return (*protein).to_string();
        }
    }

    tokens
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_MAIN.to_string())
}

/// Time buckets for the cooking-method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeBucket {
    /// 15 minutes or less
    Quick,
    /// 16 to 30 minutes
    Medium,
    /// More than 30 minutes
    Long,
}

impl TimeBucket {
    fn from_minutes(minutes: u32) -> TimeBucket {
        if minutes <= 15 {
            TimeBucket::Quick
        } else if minutes <= 30 {
            TimeBucket::Medium
        } else {
            TimeBucket::Long
        }
    }
}

// Cooking methods per (bucket, cuisine) with a generic fallback per bucket.
const METHOD_TABLE: &[(TimeBucket, &[(Cuisine, &str)], &str)] = &[
    (
        TimeBucket::Quick,
        &[(Cuisine::Indian, "tawa"), (Cuisine::Chinese, "stir-fry")],
        "quick sauté",
    ),
    (
        TimeBucket::Medium,
        &[
            (Cuisine::Indian, "kadhai"),
            (Cuisine::Italian, "sauté & simmer"),
        ],
        "pan cook",
    ),
    (
        TimeBucket::Long,
        &[(Cuisine::Indian, "dum"), (Cuisine::Chinese, "wok toss")],
        "slow simmer",
    ),
];

/// Look up the cooking method for a time budget and cuisine.
pub fn cooking_method(minutes: u32, cuisine: Cuisine) -> &'static str {
    let bucket = TimeBucket::from_minutes(minutes);
    for (entry_bucket, methods, fallback) in METHOD_TABLE {
        if *entry_bucket == bucket {
            return methods
                .iter()
                .find(|(c, _)| *c == cuisine)
                .map(|(_, m)| *m)
                .unwrap_or(fallback);
        }
    }
    unreachable!("every minute value maps to a bucket")
}
