// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single symbolic ingredient from the pantry (in practice one emoji).
///
/// Tokens carry no structure beyond equality and ordering; the ordering is
/// what makes an ingredient list canonicalizable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientToken(String);

impl IngredientToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IngredientToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for IngredientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a token list from string slices. Mostly useful in tests and demos.
pub fn tokens(raw: &[&str]) -> Vec<IngredientToken> {
    raw.iter().map(|&s| IngredientToken::from(s)).collect()
}

/// The cooking context. Recipes only match within the same cookware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cookware {
    Pan,
    Pot,
}

impl Cookware {
    pub const ALL: [Cookware; 2] = [Cookware::Pan, Cookware::Pot];

    /// Lowercase identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Pot => "pot",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pan => "Pan",
            Self::Pot => "Pot",
        }
    }

    /// What the kitchen shows while a dish is on the heat.
    pub fn cooking_banner(&self) -> &'static str {
        match self {
            Self::Pan => "♨️💥 Sizzle...",
            Self::Pot => "💨🍲 Boiling...",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Cookware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The user-facing dish: an emoji plus a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishResult {
    pub emoji: String,
    pub name: String,
}

impl DishResult {
    pub fn new(emoji: impl Into<String>, name: impl Into<String>) -> Self {
        Self { emoji: emoji.into(), name: name.into() }
    }
}

impl fmt::Display for DishResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}

/// A recipe entry. `items` keeps the order it was entered in; matching never
/// looks at that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub cookware: Cookware,
    pub items: Vec<IngredientToken>,
    pub result: DishResult,
}

/// Result of one cooking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched(DishResult),
    Fallback(DishResult),
    Burnt,
    Undercooked,
}

pub const BURNT_EMOJI: &str = "🗯️";
pub const BURNT_NAME: &str = "Burnt! Try lower heat.";
pub const UNDERCOOKED_EMOJI: &str = "❄️";
pub const UNDERCOOKED_NAME: &str = "Undercooked… more heat!";

impl Outcome {
    /// The `{emoji, name}` pair to show for this outcome.
    pub fn dish(&self) -> DishResult {
        match self {
            Self::Matched(dish) | Self::Fallback(dish) => dish.clone(),
            Self::Burnt => DishResult::new(BURNT_EMOJI, BURNT_NAME),
            Self::Undercooked => DishResult::new(UNDERCOOKED_EMOJI, UNDERCOOKED_NAME),
        }
    }

    /// Burnt and undercooked dishes come from the heat alone, never from a recipe.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Burnt | Self::Undercooked)
    }
}
