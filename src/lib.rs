// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod store;
pub use crate::config::KitchenConfig;
pub use crate::core::engine::KitchenEngine;
pub use crate::error::{KitchenError, Result};
pub use crate::session::KitchenSession;
