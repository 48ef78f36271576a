//! # PantryPilot Recipe & Nutrition Engine
//!
//! A rule-based recipe generator and daily nutrition log. Free-text
//! ingredient input is normalized into tokens, classified into a cuisine and
//! main ingredient, expanded into a quantified ingredient list, balanced
//! toward a per-serving calorie target, and narrated into cooking steps,
//! substitutions, and tips. A file-backed key-value store persists saved
//! recipes and per-day nutrition logs, namespaced per user.

pub mod balancer;
pub mod builder;
pub mod classifier;
pub mod engine;
pub mod export;
pub mod ingredient;
pub mod narrative;
pub mod normalizer;
pub mod storage;
pub mod tracker;
