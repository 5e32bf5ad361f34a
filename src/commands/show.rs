use crate::cli::ShowArgs;
use crate::config::Config;
use crate::core::data::{Recipe, RecipeCatalog};
use crate::core::traits::RecipeSearch;
use crate::utils::output::{OutputStyle, handle_not_found, recipe_detail_lines};
use crate::utils::pagination::{get_terminal_size, paginate_static_content, should_paginate};
use anyhow::Result;

const FALLBACK_WIDTH: usize = 80;

pub fn handle_show_command(
    config: &Config,
    catalog: &RecipeCatalog,
    args: &ShowArgs,
) -> Result<()> {
    let Some(recipe) = catalog.find_by_name(&args.name) else {
        tracing::info!(name = %args.name, "Recipe not found");
        handle_not_found("Recipe", &args.name);
        return Ok(());
    };

    tracing::info!(recipe = recipe.name(), "Showing recipe");
    let image = config.resolve_asset(recipe.image_path());
    if !image.exists() {
        tracing::debug!(path = %image.display(), "Recipe image is not available");
    }

    // Non-interactive output has no terminal size, so it is never paged
    match get_terminal_size() {
        Ok((rows, cols)) => {
            let content = detail_text(recipe, cols as usize);
            if should_paginate(&content, rows) {
                paginate_static_content(&content)?;
            } else {
                print_detail(recipe, cols as usize);
            }
        }
        Err(_) => print_detail(recipe, FALLBACK_WIDTH),
    }

    Ok(())
}

fn print_detail(recipe: &Recipe, width: usize) {
    OutputStyle::print_header(recipe.name());
    for line in recipe_detail_lines(recipe, width) {
        if is_heading(&line) {
            println!("{}", OutputStyle::label(&line));
        } else {
            println!("{}", line);
        }
    }
}

fn is_heading(line: &str) -> bool {
    matches!(line, "Ingredients:" | "Instructions:")
}

/// Uncoloured detail text for the pager
pub fn detail_text(recipe: &Recipe, width: usize) -> String {
    let mut lines = vec![recipe.name().to_string(), "=".repeat(recipe.name().chars().count())];
    lines.extend(recipe_detail_lines(recipe, width));
    lines.join("\n")
}
