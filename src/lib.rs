//! Recipe Library - a terminal recipe browser
//!
//! This library provides the recipe catalog and its filter, the interactive
//! Listing/Detail browser and the non-interactive `list` and `show` commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    traits::{RecipeSearch, RecipeSource},
    data::{Difficulty, Facet, FacetKind, Recipe, RecipeCatalog, RecipeQuery},
    seed::BuiltinRecipes,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
