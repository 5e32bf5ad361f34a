//! Interactive terminal browser
//!
//! Listing and Detail screens built from an explicit `ViewState`, pure
//! renderers and a thin crossterm driver.

pub mod frame;
pub mod input;
pub mod render;
pub mod state;
pub mod terminal;

pub use state::{Action, Screen, ViewState};
