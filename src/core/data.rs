//! Core data structures for the recipe library
//!
//! Recipes are immutable values. The catalog keeps them in authored order and
//! every query result preserves that order.

use crate::core::traits::{RecipeSearch, RecipeSource};
use serde::Serialize;
use std::fmt;

/// Sentinel facet value meaning "no constraint"
pub const ALL: &str = "All";

/// How hard a recipe is to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const VARIANTS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: String,
    instructions: String,
    cooking_time: u32,
    image_path: String,
    difficulty: Difficulty,
    prep_time: u32,
    cuisine_type: String,
    dietary_preferences: String,
}

impl Recipe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
        cooking_time: u32,
        image_path: impl Into<String>,
        difficulty: Difficulty,
        prep_time: u32,
        cuisine_type: impl Into<String>,
        dietary_preferences: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            cooking_time,
            image_path: image_path.into(),
            difficulty,
            prep_time,
            cuisine_type: cuisine_type.into(),
            dietary_preferences: dietary_preferences.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Cooking time in minutes
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Preparation time in minutes
    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn cuisine_type(&self) -> &str {
        &self.cuisine_type
    }

    pub fn dietary_preferences(&self) -> &str {
        &self.dietary_preferences
    }

    /// Every keyword must appear in the name or the ingredients.
    /// Keywords are expected to be lower-cased already.
    pub fn matches_keywords(&self, keywords: &[String]) -> bool {
        let name = self.name.to_lowercase();
        let ingredients = self.ingredients.to_lowercase();

        keywords
            .iter()
            .all(|k| name.contains(k.as_str()) || ingredients.contains(k.as_str()))
    }

    /// Value of the field a facet constrains
    pub fn facet_value(&self, kind: FacetKind) -> &str {
        match kind {
            FacetKind::Difficulty => self.difficulty.as_str(),
            FacetKind::Cuisine => &self.cuisine_type,
            FacetKind::Dietary => &self.dietary_preferences,
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.cuisine_type)
    }
}

/// The three categorical filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Difficulty,
    Cuisine,
    Dietary,
}

impl FacetKind {
    pub fn label(&self) -> &'static str {
        match self {
            FacetKind::Difficulty => "Difficulty",
            FacetKind::Cuisine => "Cuisine",
            FacetKind::Dietary => "Dietary",
        }
    }
}

/// A facet selection. `All` places no constraint; `Only` requires an exact,
/// case-sensitive match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Map a selection string to a facet, treating the `"All"` sentinel as inactive
    pub fn from_selection(value: &str) -> Self {
        if value == ALL {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    pub fn from_option(value: Option<&str>) -> Self {
        value.map(Self::from_selection).unwrap_or_default()
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }
}

/// Parsed search input: keywords plus the three facet selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub keywords: Vec<String>,
    pub difficulty: Facet,
    pub cuisine: Facet,
    pub dietary: Facet,
}

impl Default for RecipeQuery {
    fn default() -> Self {
        Self::new("")
    }
}

impl RecipeQuery {
    /// Build a query from raw search text with all facets inactive
    pub fn new(raw_search: &str) -> Self {
        Self {
            keywords: Self::parse_keywords(raw_search),
            difficulty: Facet::All,
            cuisine: Facet::All,
            dietary: Facet::All,
        }
    }

    /// Lower-case the raw text, split on commas and trim each piece.
    ///
    /// Empty pieces are kept: an empty string matches every recipe, so an empty
    /// search or a stray comma places no constraint.
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.to_lowercase()
            .split(',')
            .map(|k| k.trim().to_string())
            .collect()
    }

    pub fn with_facet(mut self, kind: FacetKind, facet: Facet) -> Self {
        *self.facet_mut(kind) = facet;
        self
    }

    pub fn facet(&self, kind: FacetKind) -> &Facet {
        match kind {
            FacetKind::Difficulty => &self.difficulty,
            FacetKind::Cuisine => &self.cuisine,
            FacetKind::Dietary => &self.dietary,
        }
    }

    fn facet_mut(&mut self, kind: FacetKind) -> &mut Facet {
        match kind {
            FacetKind::Difficulty => &mut self.difficulty,
            FacetKind::Cuisine => &mut self.cuisine,
            FacetKind::Dietary => &mut self.dietary,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        recipe.matches_keywords(&self.keywords)
            && [FacetKind::Difficulty, FacetKind::Cuisine, FacetKind::Dietary]
                .into_iter()
                .all(|kind| self.facet(kind).matches(recipe.facet_value(kind)))
    }
}

/// Fixed, ordered collection of recipes
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Build a catalog from a data provider
    pub fn from_source(source: &impl RecipeSource) -> Self {
        Self::new(source.load_recipes())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Positions of matching recipes, in catalog order
    pub fn filter_indices(&self, query: &RecipeQuery) -> Vec<usize> {
        self.recipes
            .iter()
            .enumerate()
            .filter(|(_, r)| query.matches(r))
            .map(|(i, _)| i)
            .collect()
    }
}

impl RecipeSearch for RecipeCatalog {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn filter(&self, query: &RecipeQuery) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| query.matches(r)).collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.name == name)
            .or_else(|| {
                let wanted = name.trim().to_lowercase();
                self.recipes.iter().find(|r| r.name.to_lowercase() == wanted)
            })
    }
}
