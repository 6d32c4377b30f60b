//! # Meal Catalog Loading
//!
//! A catalog file is a JSON array of meals:
//!
//! ```json
//! [
//!   {"meal_id": "M001", "name": "Vegan Pasta", "ingredients": ["pasta", "basil"], "category": "vegan"},
//!   {"meal_id": "M002", "name": "Toast", "ingredients": ["bread"]}
//! ]
//! ```
//!
//! `category` is optional and defaults to `"general"`. Entries missing a
//! required field are skipped with a warning; the rest of the file still loads.

pub mod error;
mod samples;

pub use error::*;
pub use samples::sample_meals;

use crate::model::Meal;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Parses a catalog document, skipping malformed entries.
///
/// # Errors
/// [`CatalogError::Parse`] for invalid JSON, [`CatalogError::NotAList`] when the
/// top level is not an array.
pub fn parse_catalog(json: &str) -> Result<Vec<Meal>, CatalogError> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
    let Value::Array(entries) = document else {
        return Err(CatalogError::NotAList);
    };

    let total = entries.len();
    let meals: Vec<Meal> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Meal>(entry) {
            Ok(meal) => Some(meal),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed catalog entry");
                None
            }
        })
        .collect();

    info!(loaded = meals.len(), skipped = total - meals.len(), "Catalog parsed");
    Ok(meals)
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Meal>, CatalogError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_catalog(&json)
}
