use crate::config::Config;
use crate::core::data::RecipeCatalog;
use crate::ui::terminal;
use anyhow::{Context, Result};

pub fn handle_browse_command(config: &Config, catalog: &RecipeCatalog) -> Result<()> {
    tracing::debug!(assets_dir = %config.general.assets_dir.display(), "Starting browser");
    terminal::run(catalog, config).context("Recipe browser failed")
}
