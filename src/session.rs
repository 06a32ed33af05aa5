// File: src/session.rs
//! Front-end state around the engine: which cookware is selected, what is in
//! each one, where the heat dial sits, and the last dish served.

use crate::config::KitchenConfig;
use crate::core::engine::KitchenEngine;
use crate::core::heat::{HeatLevel, HeatReading};
use crate::core::types::{Cookware, DishResult, IngredientToken, Outcome, Recipe};
use crate::error::{KitchenError, Result};
use std::collections::HashMap;
use tracing::warn;

pub struct KitchenSession {
    engine: KitchenEngine,
    pantry: Vec<IngredientToken>,
    selected: Cookware,
    contents: HashMap<Cookware, Vec<IngredientToken>>,
    heat: HeatLevel,
    last_dish: Option<DishResult>,
}

impl KitchenSession {
    pub fn new(config: &KitchenConfig) -> Self {
        Self {
            engine: KitchenEngine::from_config(config),
            pantry: config.pantry.clone(),
            selected: Cookware::Pan,
            contents: HashMap::new(),
            heat: HeatLevel::default(),
            last_dish: None,
        }
    }

    pub fn engine(&self) -> &KitchenEngine {
        &self.engine
    }

    pub fn pantry(&self) -> &[IngredientToken] {
        &self.pantry
    }

    pub fn selected(&self) -> Cookware {
        self.selected
    }

    pub fn heat(&self) -> HeatLevel {
        self.heat
    }

    pub fn heat_reading(&self) -> HeatReading {
        self.engine.classify(self.heat)
    }

    pub fn last_dish(&self) -> Option<&DishResult> {
        self.last_dish.as_ref()
    }

    /// Ingredients in the selected cookware, in the order they went in.
    pub fn active_items(&self) -> &[IngredientToken] {
        self.items_in(self.selected)
    }

    pub fn items_in(&self, cookware: Cookware) -> &[IngredientToken] {
        self.contents.get(&cookware).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn select_cookware(&mut self, cookware: Cookware) {
        self.selected = cookware;
    }

    pub fn add_item(&mut self, token: IngredientToken) -> Result<()> {
        if !self.pantry.contains(&token) {
            warn!(token = %token, "ingredient not in pantry");
            return Err(KitchenError::UnknownIngredient(token.to_string()));
        }
        self.last_dish = None;
        self.contents.entry(self.selected).or_default().push(token);
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<IngredientToken> {
        let removed = match self.contents.get_mut(&self.selected) {
            Some(items) if index < items.len() => items.remove(index),
            items => {
                let len = items.map_or(0, |items| items.len());
                return Err(KitchenError::NoSuchItem { index, len });
            }
        };
        self.last_dish = None;
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.last_dish = None;
        self.contents.remove(&self.selected);
    }

    pub fn heat_up(&mut self) {
        self.heat.increment();
    }

    pub fn heat_down(&mut self) {
        self.heat.decrement();
    }

    pub fn reset_heat(&mut self) {
        self.heat.reset();
    }

    /// Cooks whatever is in the selected cookware. The ingredients stay put.
    pub fn cook(&mut self) -> Result<Outcome> {
        let outcome = self
            .engine
            .resolve(self.selected, self.active_items(), self.heat)?;
        self.last_dish = Some(outcome.dish());
        Ok(outcome)
    }

    pub fn save_recipe(&mut self, name: &str) -> Result<&Recipe> {
        let items = self.items_in(self.selected).to_vec();
        self.engine.save_recipe(name, self.selected, &items)
    }

    pub fn custom_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.engine.registry().custom_recipes()
    }

    /// Puts a saved recipe's ingredients back into its cookware and selects it.
    pub fn load_recipe(&mut self, index: usize) -> Result<()> {
        let recipe = self
            .engine
            .registry()
            .custom_recipe(index)
            .ok_or(KitchenError::NoSuchRecipe(index))?;
        let cookware = recipe.cookware;
        let items = recipe.items.clone();

        self.selected = cookware;
        self.contents.insert(cookware, items);
        self.last_dish = None;
        Ok(())
    }
}

impl Default for KitchenSession {
    fn default() -> Self {
        Self::new(&KitchenConfig::default())
    }
}
