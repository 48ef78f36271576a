//! # Persistence Layer
//!
//! A file-backed JSON key-value store, namespaced per user: each key maps
//! to one JSON document under a data directory. On top of the raw store sit
//! the two persisted collections: saved recipes (appended with a timestamp)
//! and per-day nutrition logs.
//!
//! Reads degrade gracefully: a missing or corrupt document yields `None`
//! (or a default log) rather than an error, so display code can always
//! render something. Writes propagate errors.

use crate::engine::Recipe;
use crate::tracker::DailyLog;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A recipe persisted to a user's saved list, with the save timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    /// The saved recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// When the recipe was saved
    pub saved_at: DateTime<Utc>,
}

/// File-backed key-value store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating data directory {}", root.display()))?;
        info!("Storage opened at {}", root.display());
        Ok(Self { root })
    }

    /// Namespace a key per user: `"{key}_{user_id}"`.
    pub fn user_key(key: &str, user_id: &str) -> String {
        format!("{key}_{user_id}")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read and deserialize the value at `key`. Missing or unreadable
    /// documents yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("No document at {}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Discarding corrupt document {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Serialize and write `value` at `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value).context("serializing document")?;
        fs::write(&path, raw).with_context(|| format!("writing {}", path.display()))?;
        debug!("Wrote document {}", path.display());
        Ok(())
    }

    /// Delete the document at `key`. Deleting a missing key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", path.display())),
        }
    }

    /// The data directory this store is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn recipes_key(user_id: &str) -> String {
    Storage::user_key("recipes", user_id)
}

fn daily_log_key(user_id: &str, date: NaiveDate) -> String {
    Storage::user_key(&format!("nutrition_{date}"), user_id)
}

/// Append a recipe to the user's saved list with the current timestamp.
pub fn save_recipe(storage: &Storage, user_id: &str, recipe: &Recipe) -> Result<()> {
    let key = recipes_key(user_id);
    let mut saved: Vec<SavedRecipe> = storage.get(&key).unwrap_or_default();
    saved.push(SavedRecipe {
        recipe: recipe.clone(),
        saved_at: Utc::now(),
    });
    storage.set(&key, &saved)?;
    info!("Saved recipe '{}' for user {}", recipe.title, user_id);
    Ok(())
}

/// Load the user's saved recipes, newest last. Missing list is empty.
pub fn load_recipes(storage: &Storage, user_id: &str) -> Vec<SavedRecipe> {
    storage.get(&recipes_key(user_id)).unwrap_or_default()
}

/// Load a user's nutrition log for one day. Missing log is empty.
pub fn load_daily_log(storage: &Storage, user_id: &str, date: NaiveDate) -> DailyLog {
    storage
        .get(&daily_log_key(user_id, date))
        .unwrap_or_default()
}

/// Persist a user's nutrition log for one day.
pub fn save_daily_log(
    storage: &Storage,
    user_id: &str,
    date: NaiveDate,
    log: &DailyLog,
) -> Result<()> {
    storage.set(&daily_log_key(user_id, date), log)
}
