use anyhow::Result;
use clap::Parser;

use recipe_library::cli::Cli;
use recipe_library::config::Config;
use recipe_library::logging::init_tracing;
use recipe_library::utils::error::{AppError, report_error};
use recipe_library::{BuiltinRecipes, RecipeCatalog, VERSION};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.debug);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    tracing::info!(
        version = VERSION,
        recipes = catalog.len(),
        config = %config_path.display(),
        "Recipe library starting"
    );

    cli.command().execute(config, &catalog)?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    match &cli.config {
        Some(config_path) => Config::load_custom(config_path),
        None => {
            Config::ensure_config_exists()?;
            Config::load()
        }
    }
}
