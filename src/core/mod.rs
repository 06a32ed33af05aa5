pub mod canonical;
pub mod engine;
pub mod heat;
pub mod namer;
pub mod registry;
pub mod types;
