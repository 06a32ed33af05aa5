// File: src/store.rs
use crate::core::registry::RecipeRegistry;
use crate::core::types::{Cookware, DishResult, IngredientToken, Recipe};
use crate::error::{KitchenError, Result};
use tracing::{info, warn};

/// Emoji given to every user-saved recipe.
pub const CUSTOM_RECIPE_EMOJI: &str = "⭐";

/// Appends user-named recipes to a registry's custom table.
#[derive(Default)]
pub struct RecipeStore;

/// What the user asked to save.
pub struct RecipeSubmission<'a> {
    pub name: &'a str,
    pub cookware: Cookware,
    pub items: &'a [IngredientToken],
}

impl RecipeStore {
    pub fn new() -> Self {
        Self
    }

    /// Validates and appends. The name is stored trimmed; the items are stored
    /// in entry order. Saving an existing combination again adds a second,
    /// unreachable entry.
    pub fn save<'r>(
        &self,
        registry: &'r mut RecipeRegistry,
        submission: &RecipeSubmission<'_>,
    ) -> Result<&'r Recipe> {
        let name = submission.name.trim();
        if name.is_empty() {
            warn!("rejected recipe save: blank name");
            return Err(KitchenError::BlankName);
        }
        if submission.items.is_empty() {
            warn!(name, "rejected recipe save: no ingredients");
            return Err(KitchenError::EmptyIngredients);
        }

        info!(
            name,
            cookware = submission.cookware.id(),
            index = registry.custom_len(),
            "saved custom recipe"
        );
        Ok(registry.push_custom(Recipe {
            cookware: submission.cookware,
            items: submission.items.to_vec(),
            result: DishResult::new(CUSTOM_RECIPE_EMOJI, name),
        }))
    }
}
