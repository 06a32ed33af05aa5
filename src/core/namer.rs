use crate::core::heat::HeatBand;
use crate::core::types::{Cookware, DishResult, IngredientToken};
use std::collections::HashMap;

pub const PAN_FALLBACK_EMOJI: &str = "🥘";
pub const POT_FALLBACK_EMOJI: &str = "🍲";

const WORD_SEPARATOR: &str = " + ";

/// Names dishes that no recipe covers, e.g. "fish + lemon on medium heat".
#[derive(Debug, Clone)]
pub struct FallbackNamer {
    words: HashMap<IngredientToken, String>,
}

impl FallbackNamer {
    pub fn new(words: HashMap<IngredientToken, String>) -> Self {
        Self { words }
    }

    /// Tokens without a word are used verbatim.
    pub fn word_for<'a>(&'a self, token: &'a IngredientToken) -> &'a str {
        self.words.get(token).map_or(token.as_str(), String::as_str)
    }

    /// Words follow the entry order of `items`, not the canonical order.
    pub fn name(&self, items: &[IngredientToken], band: HeatBand) -> String {
        let words: Vec<&str> = items.iter().map(|t| self.word_for(t)).collect();
        format!(
            "{} on {} heat",
            words.join(WORD_SEPARATOR),
            band.label().to_lowercase()
        )
    }

    pub fn dish(&self, cookware: Cookware, items: &[IngredientToken], band: HeatBand) -> DishResult {
        DishResult::new(fallback_emoji(cookware), self.name(items, band))
    }
}

impl Default for FallbackNamer {
    fn default() -> Self {
        Self::new(default_words())
    }
}

pub fn fallback_emoji(cookware: Cookware) -> &'static str {
    match cookware {
        Cookware::Pan => PAN_FALLBACK_EMOJI,
        Cookware::Pot => POT_FALLBACK_EMOJI,
    }
}

/// Only a handful of pantry items have words; the rest pass through.
pub fn default_words() -> HashMap<IngredientToken, String> {
    [
        ("🐟", "fish"),
        ("🍋", "lemon"),
        ("🥚", "egg"),
        ("🥦", "broccoli"),
        ("🍞", "bread"),
        ("🧀", "cheese"),
        ("🍅", "tomato"),
    ]
    .into_iter()
    .map(|(token, word)| (IngredientToken::from(token), word.to_string()))
    .collect()
}
