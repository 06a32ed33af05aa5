// src/config.rs
//! Static kitchen data: the pantry, the built-in recipes, and the fallback
//! word map. Loaded once when the engine is built and read-only after that.

use crate::core::namer::default_words;
use crate::core::registry::builtin_recipes;
use crate::core::types::{IngredientToken, Recipe};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_COOK_DELAY_MS: u64 = 1200;

const PANTRY: [&str; 36] = [
    "🥚", "🍅", "🍞", "🧀", "🥓", "🍗", "🍤", "🥦", "🍄", "🧄", "🧅", "🫑", "🍝", "🍚", "🍜", "🍔",
    "🍕", "🥗", "🍰", "🍩", "🧈", "🧂", "🌶️", "🫙", "🧊", "🥔", "🐟", "🌽", "🍌", "🍫", "🥬", "🍓",
    "🥜", "🍯", "🍎", "🍋",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Tokens the user may put in the cookware, in display order.
    pub pantry: Vec<IngredientToken>,
    /// Built-in recipes, in lookup order.
    pub recipes: Vec<Recipe>,
    pub fallback_words: HashMap<IngredientToken, String>,
    /// How long the front end lets a dish cook before revealing it.
    pub cook_delay_ms: u64,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            pantry: default_pantry(),
            recipes: builtin_recipes(),
            fallback_words: default_words(),
            cook_delay_ms: DEFAULT_COOK_DELAY_MS,
        }
    }
}

impl KitchenConfig {
    /// Reads a JSON config. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            pantry = config.pantry.len(),
            recipes = config.recipes.len(),
            "loaded kitchen config"
        );
        Ok(config)
    }
}

pub fn default_pantry() -> Vec<IngredientToken> {
    PANTRY.iter().map(|&t| IngredientToken::from(t)).collect()
}
