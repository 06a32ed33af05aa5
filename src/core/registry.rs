// --- File: src/core/registry.rs
use crate::core::canonical::{canonical_key, CanonicalKey};
use crate::core::types::{Cookware, DishResult, IngredientToken, Recipe};
use tracing::debug;

/// A recipe together with its precomputed match key.
#[derive(Debug, Clone)]
struct RegistryEntry {
    key: CanonicalKey,
    recipe: Recipe,
}

impl RegistryEntry {
    fn new(recipe: Recipe) -> Self {
        Self { key: canonical_key(&recipe.items), recipe }
    }

    fn matches(&self, cookware: Cookware, key: &CanonicalKey) -> bool {
        self.recipe.cookware == cookware && &self.key == key
    }
}

/// Built-in recipes plus the recipes saved during this session.
///
/// Lookups scan built-ins first, then customs, and return the first hit. A
/// custom recipe that collides with a built-in (same cookware, same canonical
/// key) is therefore never returned, and neither is a second custom save of an
/// already-saved combination. Entries are not deduplicated on insert.
#[derive(Debug, Clone)]
pub struct RecipeRegistry {
    builtin: Vec<RegistryEntry>,
    custom: Vec<RegistryEntry>,
}

impl RecipeRegistry {
    pub fn new(builtin: Vec<Recipe>) -> Self {
        Self {
            builtin: builtin.into_iter().map(RegistryEntry::new).collect(),
            custom: Vec::new(),
        }
    }

    pub fn find_match(&self, cookware: Cookware, items: &[IngredientToken]) -> Option<&Recipe> {
        let key = canonical_key(items);
        let found = self
            .builtin
            .iter()
            .chain(self.custom.iter())
            .find(|entry| entry.matches(cookware, &key))
            .map(|entry| &entry.recipe);
        debug!(cookware = cookware.id(), key = %key, hit = found.is_some(), "recipe lookup");
        found
    }

    pub fn builtin_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.builtin.iter().map(|e| &e.recipe)
    }

    /// Saved recipes, oldest first.
    pub fn custom_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.custom.iter().map(|e| &e.recipe)
    }

    pub fn custom_recipe(&self, index: usize) -> Option<&Recipe> {
        self.custom.get(index).map(|e| &e.recipe)
    }

    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Appends without any validation; `RecipeStore` is the checked entry point.
    pub(crate) fn push_custom(&mut self, recipe: Recipe) -> &Recipe {
        self.custom.push(RegistryEntry::new(recipe));
        let index = self.custom.len() - 1;
        &self.custom[index].recipe
    }
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::new(builtin_recipes())
    }
}

/// (cookware, ingredients, emoji, name)
const BUILTIN_TABLE: &[(Cookware, &[&str], &str, &str)] = &[
    (Cookware::Pan, &["🥚"], "🍳", "Fried Egg"),
    (Cookware::Pan, &["🍞", "🧀", "🍞"], "🥪", "Grilled Cheese"),
    (Cookware::Pan, &["🥓", "🥚"], "🍳", "Bacon & Eggs"),
    (Cookware::Pan, &["🍤", "🧄", "🌶️"], "🍤", "Spicy Garlic Shrimp"),
    (Cookware::Pan, &["🐟", "🧈", "🧄", "🌶️"], "🐟", "Pan-Seared Fish"),
    (Cookware::Pot, &["🍝", "🍅", "🧄", "🧅"], "🍝", "Spaghetti Marinara"),
    (Cookware::Pot, &["🍚", "🍗", "🧅", "🥦"], "🍛", "Chicken Rice Bowl"),
    (Cookware::Pot, &["🍜", "🍤", "🧄", "🌶️"], "🍜", "Spicy Shrimp Ramen"),
    (Cookware::Pan, &["🍄", "🧅", "🧄", "🥦"], "🥘", "Veggie Stir-fry"),
    (Cookware::Pan, &["🥔", "🧈", "🧄"], "🥔", "Garlic Butter Potatoes"),
    (Cookware::Pan, &["🍌", "🍫"], "🍫", "Chocolate Banana Melt"),
    (Cookware::Pot, &["🍚", "🍤", "🧂"], "🍣", "Shrimp Rice (cheffy)"),
    (Cookware::Pan, &["🥬", "🥚"], "🥗", "Egg Salad"),
    (Cookware::Pot, &["🍓", "🍌", "🍯"], "🍓", "Fruit Compote"),
    (Cookware::Pan, &["🥜", "🍫"], "🥜", "Peanut Choco Treat"),
    (Cookware::Pot, &["🍎", "🍋", "🍯"], "🥧", "Apple Lemon Dessert"),
];

pub fn builtin_recipes() -> Vec<Recipe> {
    BUILTIN_TABLE
        .iter()
        .map(|&(cookware, items, emoji, name)| Recipe {
            cookware,
            items: items.iter().map(|&t| IngredientToken::from(t)).collect(),
            result: DishResult::new(emoji, name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::tokens;

    fn custom(cookware: Cookware, items: &[&str], name: &str) -> Recipe {
        Recipe { cookware, items: tokens(items), result: DishResult::new("⭐", name) }
    }

    #[test]
    fn test_builtin_table_loaded_in_order() {
        let registry = RecipeRegistry::default();
        let names: Vec<&str> = registry.builtin_recipes().map(|r| r.result.name.as_str()).collect();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "Fried Egg");
        assert_eq!(names[15], "Apple Lemon Dessert");
        assert_eq!(registry.custom_len(), 0);
    }

    #[test]
    fn test_match_ignores_order() {
        let registry = RecipeRegistry::default();
        let hit = registry.find_match(Cookware::Pan, &tokens(&["🧀", "🍞", "🍞"])).unwrap();
        assert_eq!(hit.result.name, "Grilled Cheese");
    }

    #[test]
    fn test_match_respects_cookware_and_multiplicity() {
        let registry = RecipeRegistry::default();
        assert!(registry.find_match(Cookware::Pot, &tokens(&["🥚"])).is_none());
        assert!(registry.find_match(Cookware::Pan, &tokens(&["🥚", "🥚"])).is_none());
        assert!(registry.find_match(Cookware::Pan, &tokens(&["🍞", "🧀"])).is_none());
    }

    #[test]
    fn test_builtin_wins_over_colliding_custom() {
        let mut registry = RecipeRegistry::default();
        let stored = registry.push_custom(custom(Cookware::Pan, &["🥚"], "My Egg"));
        assert_eq!(stored.result.name, "My Egg");
        let hit = registry.find_match(Cookware::Pan, &tokens(&["🥚"])).unwrap();
        assert_eq!(hit.result, DishResult::new("🍳", "Fried Egg"));
    }

    #[test]
    fn test_earlier_custom_wins_over_later_duplicate() {
        let mut registry = RecipeRegistry::new(Vec::new());
        registry.push_custom(custom(Cookware::Pot, &["🐟", "🍋"], "First"));
        registry.push_custom(custom(Cookware::Pot, &["🍋", "🐟"], "Second"));
        assert_eq!(registry.custom_len(), 2);
        let hit = registry.find_match(Cookware::Pot, &tokens(&["🐟", "🍋"])).unwrap();
        assert_eq!(hit.result.name, "First");
    }
}
