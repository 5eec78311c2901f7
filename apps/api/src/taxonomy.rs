//! Startup loader for the bundled trait taxonomy document.
//!
//! `travel_traits.json` describes the sixteen survey categories (A1-A8,
//! B1-B8). It is read once before the server starts and held immutable in
//! `AppState`; a missing or malformed file fails startup rather than
//! serving with a partial catalog.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One taxonomy entry: a category code with its curated label and blurb.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTrait {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Reads and parses the taxonomy file at `path`.
pub fn load_taxonomy(path: &str) -> Result<Vec<TravelTrait>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trait taxonomy from '{path}'"))?;
    let traits: Vec<TravelTrait> = serde_json::from_str(&raw)
        .with_context(|| format!("Trait taxonomy '{path}' is not valid JSON"))?;
    Ok(traits)
}
