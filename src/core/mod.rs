//! Core business logic layer
//!
//! This module contains the recipe data structures, the built-in data
//! provider and the catalog filter.

pub mod data;
pub mod seed;
pub mod traits;
