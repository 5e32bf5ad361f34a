//! Core trait definitions for recipe access
//!
//! The filtering logic only sees these traits, so it can be exercised without
//! any terminal wiring.

use crate::core::data::{Recipe, RecipeQuery};

/// Data provider for the catalog
///
/// Implementations return recipes in the order they should be displayed.
pub trait RecipeSource {
    /// Load the full, ordered recipe list
    fn load_recipes(&self) -> Vec<Recipe>;
}

/// Search operations over a recipe collection
pub trait RecipeSearch {
    /// All recipes in catalog order
    fn recipes(&self) -> &[Recipe];

    /// Recipes matching the query, in catalog order
    fn filter(&self, query: &RecipeQuery) -> Vec<&Recipe>;

    /// Look up a recipe by exact name, falling back to a case-insensitive match
    fn find_by_name(&self, name: &str) -> Option<&Recipe>;
}
