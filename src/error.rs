// src/error.rs
//! Error types for the kitchen
//!
//! Declined operations (blank names, empty pans) are reported here too; none of
//! them leave the kitchen in a changed state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitchenError {
    /// Recipe name is empty once surrounding whitespace is trimmed
    #[error("Recipe name must not be blank")]
    BlankName,

    /// Nothing in the cookware
    #[error("Add at least one ingredient first")]
    EmptyIngredients,

    /// Token is not part of the configured pantry
    #[error("'{0}' is not in the pantry")]
    UnknownIngredient(String),

    /// Removal index past the end of the ingredient list
    #[error("No ingredient at position {index} (cookware holds {len})")]
    NoSuchItem { index: usize, len: usize },

    /// Saved-recipe index past the end of the custom table
    #[error("No saved recipe at position {0}")]
    NoSuchRecipe(usize),

    /// I/O error reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Invalid kitchen configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
