use crate::config::KitchenConfig;
use crate::core::heat::{classify, HeatLevel, HeatReading};
use crate::core::namer::FallbackNamer;
use crate::core::registry::RecipeRegistry;
use crate::core::types::{Cookware, IngredientToken, Outcome, Recipe};
use crate::error::{KitchenError, Result};
use crate::store::{RecipeStore, RecipeSubmission};
use tracing::debug;

// The kitchen engine is composed of the registry and the naming/saving helpers.
// It holds no global state; whoever owns it owns the custom recipe table.
// The registry is only reachable read-only; saves go through the store.
pub struct KitchenEngine {
    registry: RecipeRegistry,
    namer: FallbackNamer,
    store: RecipeStore,
}

impl KitchenEngine {
    pub fn new() -> Self {
        Self::from_config(&KitchenConfig::default())
    }

    pub fn from_config(config: &KitchenConfig) -> Self {
        Self {
            registry: RecipeRegistry::new(config.recipes.clone()),
            namer: FallbackNamer::new(config.fallback_words.clone()),
            store: RecipeStore::new(),
        }
    }

    /// Resolves one cooking attempt. Read-only: the same inputs against the
    /// same registry always give the same outcome.
    pub fn resolve(
        &self,
        cookware: Cookware,
        items: &[IngredientToken],
        heat: HeatLevel,
    ) -> Result<Outcome> {
        if items.is_empty() {
            return Err(KitchenError::EmptyIngredients);
        }

        // 1. Heat alone can ruin the dish
        let reading = classify(heat);
        if let Some(outcome) = reading.override_outcome {
            debug!(heat = heat.value(), ?outcome, "heat override");
            return Ok(outcome);
        }

        // 2. Known recipe
        if let Some(recipe) = self.registry.find_match(cookware, items) {
            return Ok(Outcome::Matched(recipe.result.clone()));
        }

        // 3. Generated name
        let dish = self.namer.dish(cookware, items, reading.band);
        debug!(name = %dish.name, "fallback dish");
        Ok(Outcome::Fallback(dish))
    }

    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    pub fn namer(&self) -> &FallbackNamer {
        &self.namer
    }

    pub fn classify(&self, heat: HeatLevel) -> HeatReading {
        classify(heat)
    }

    pub fn save_recipe(
        &mut self,
        name: &str,
        cookware: Cookware,
        items: &[IngredientToken],
    ) -> Result<&Recipe> {
        let submission = RecipeSubmission { name, cookware, items };
        self.store.save(&mut self.registry, &submission)
    }
}

impl Default for KitchenEngine {
    fn default() -> Self {
        Self::new()
    }
}
