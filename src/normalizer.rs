//! # Ingredient Normalizer
//!
//! Turns free-text ingredient input into a canonical list of lowercase
//! ingredient tokens. Input is split on commas, semicolons, and newlines;
//! each piece is trimmed and lowercased, and empty pieces are dropped.
//!
//! Order and duplicates are preserved: tokens feed priority-ordered rule
//! tables downstream, so position carries meaning.
//!
//! ## Usage
//!
//! ```rust
//! use pantrypilot::normalizer::normalize_items;
//!
//! let tokens = normalize_items("Rice, Tomato; paneer\nGarlic");
//! assert_eq!(tokens, vec!["rice", "tomato", "paneer", "garlic"]);
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

/// Minimum number of normalized tokens required before recipe generation
/// may proceed. Fewer is a rejected request, not a partial recipe.
pub const MIN_TOKENS: usize = 3;

// Separator pattern for ingredient lists. Runs of separators collapse so
// "rice,,tomato" yields two tokens, not three.
const SEPARATOR_PATTERN: &str = r"[,;\n]+";

lazy_static! {
    static ref SEPARATORS: Regex =
        Regex::new(SEPARATOR_PATTERN).expect("Separator pattern should be valid");
}

/// Normalize raw ingredient text into an ordered list of lowercase tokens.
///
/// Empty input yields an empty list; there are no error conditions.
pub fn normalize_items(raw: &str) -> Vec<String> {
    let lowered = raw.to_lowercase();
    let tokens: Vec<String> = SEPARATORS
        .split(&lowered)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Normalized {} tokens from raw input", tokens.len());
    tokens
}

/// Check whether a token list meets the minimum-ingredient gate.
pub fn has_enough_tokens(tokens: &[String]) -> bool {
    tokens.len() >= MIN_TOKENS
}

/// Title-case a name for display: first character uppercased, the rest
/// lowercased ("garam masala" becomes "Garam masala").
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_all_separators() {
        let tokens = normalize_items("rice, tomato; onion\npaneer");
        assert_eq!(tokens, vec!["rice", "tomato", "onion", "paneer"]);
    }

    #[test]
    fn test_trims_and_lowercases() {
        let tokens = normalize_items("  Olive Oil ,TOMATO ");
        assert_eq!(tokens, vec!["olive oil", "tomato"]);
    }

    #[test]
    fn test_drops_empty_pieces() {
        let tokens = normalize_items("rice,,;\n,tomato");
        assert_eq!(tokens, vec!["rice", "tomato"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_items("").is_empty());
        assert!(normalize_items("  \n ; ,").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let tokens = normalize_items("tomato, rice, tomato");
        assert_eq!(tokens, vec!["tomato", "rice", "tomato"]);
    }

    #[test]
    fn test_minimum_gate() {
        assert!(!has_enough_tokens(&normalize_items("a, b")));
        assert!(has_enough_tokens(&normalize_items("a, b, c")));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("paneer"), "Paneer");
        assert_eq!(title_case("GARAM MASALA"), "Garam masala");
        assert_eq!(title_case(""), "");
    }
}
