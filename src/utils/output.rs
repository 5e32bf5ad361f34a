use crate::cli::ListFormat;
use crate::config::Config;
use crate::core::data::Recipe;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::format::{fit_width, format_minutes, truncate_string, wrap_text};
use anyhow::{Context, Result};
use colored::*;

/// Recipe field types for unified display
enum RecipeField {
    Cooking,
    Prep,
    Difficulty,
    Cuisine,
    Dietary,
}

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn facet(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    fn print_recipe_field(field: RecipeField, recipe: &Recipe) {
        match field {
            RecipeField::Cooking => {
                Self::print_field_colored("Cooking", &format_minutes(recipe.cooking_time()), Self::content)
            }
            RecipeField::Prep => {
                Self::print_field_colored("Prep", &format_minutes(recipe.prep_time()), Self::content)
            }
            RecipeField::Difficulty => {
                Self::print_field_colored("Difficulty", recipe.difficulty().as_str(), Self::facet)
            }
            RecipeField::Cuisine => {
                Self::print_field_colored("Cuisine", recipe.cuisine_type(), Self::facet)
            }
            RecipeField::Dietary => {
                Self::print_field_colored("Dietary", recipe.dietary_preferences(), Self::facet)
            }
        }
    }

    /// Short summary block used by the detailed list format
    pub fn print_recipe_summary(recipe: &Recipe) {
        Self::print_recipe_field(RecipeField::Difficulty, recipe);
        Self::print_recipe_field(RecipeField::Cuisine, recipe);
        Self::print_recipe_field(RecipeField::Dietary, recipe);
        Self::print_recipe_field(RecipeField::Cooking, recipe);
        Self::print_recipe_field(RecipeField::Prep, recipe);
        Self::print_field_colored("Ingredients", recipe.ingredients(), Self::content);
    }

    /// One line per recipe: name, facets and an optional ingredients preview
    pub fn format_recipe_line(recipe: &Recipe, config: &Config) -> String {
        let facets = format!(
            "[{} | {} | {}]",
            recipe.difficulty(),
            recipe.cuisine_type(),
            recipe.dietary_preferences()
        );

        if config.general.content_preview {
            format!(
                "{} {}: {}",
                Self::name(recipe.name()),
                Self::facet(&facets),
                Self::content(&truncate_string(recipe.ingredients(), config.general.preview_length))
            )
        } else {
            format!("{} {}", Self::name(recipe.name()), Self::facet(&facets))
        }
    }
}

pub fn print_recipe_count(count: usize) {
    println!(
        "🍽️  {} ({} found)",
        OutputStyle::header("Recipes"),
        OutputStyle::info(&count.to_string())
    );
}

pub fn handle_not_found(item_type: &str, search_term: &str) {
    handle_flow(FlowResult::NotFound {
        item_type: item_type.to_string(),
        search_term: search_term.to_string(),
    });
}

/// Display formatter for different output formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Format recipes list according to the specified format
    pub fn format_list(recipes: &[&Recipe], format: &ListFormat, config: &Config) -> Result<()> {
        if recipes.is_empty() {
            handle_flow(FlowResult::EmptyList {
                item_type: "recipes matching your search".to_string(),
            });
            return Ok(());
        }

        match format {
            ListFormat::Simple => Self::print_simple_list(recipes, config),
            ListFormat::Detailed => Self::print_detailed_list(recipes),
            ListFormat::Table => {
                for line in Self::table_lines(recipes) {
                    println!("{}", line);
                }
            }
            ListFormat::Json => println!("{}", Self::json_list(recipes)?),
        }

        Ok(())
    }

    fn print_simple_list(recipes: &[&Recipe], config: &Config) {
        print_recipe_count(recipes.len());
        println!("{}", OutputStyle::separator());

        for recipe in recipes {
            println!("{}", OutputStyle::format_recipe_line(recipe, config));
        }
    }

    fn print_detailed_list(recipes: &[&Recipe]) {
        OutputStyle::print_header("🍽️  Detailed Recipe List");

        for (i, recipe) in recipes.iter().enumerate() {
            println!("\n{}. {}", i + 1, OutputStyle::name(recipe.name()));
            OutputStyle::print_recipe_summary(recipe);

            if i < recipes.len() - 1 {
                println!("{}", OutputStyle::separator());
            }
        }
    }

    /// Box-drawn table of name, difficulty, cuisine, dietary and total time
    pub fn table_lines(recipes: &[&Recipe]) -> Vec<String> {
        let mut name_width = "Name".len();
        let mut cuisine_width = "Cuisine".len();
        let mut dietary_width = "Dietary".len();
        let difficulty_width = "Difficulty".len();
        let time_width = "Time".len().max("999 min".len());

        for recipe in recipes {
            name_width = name_width.max(recipe.name().chars().count());
            cuisine_width = cuisine_width.max(recipe.cuisine_type().chars().count());
            dietary_width = dietary_width.max(recipe.dietary_preferences().chars().count());
        }

        name_width = name_width.min(40);
        cuisine_width = cuisine_width.min(20);
        dietary_width = dietary_width.min(20);

        let widths = [name_width, difficulty_width, cuisine_width, dietary_width, time_width];
        let rule = |left: &str, mid: &str, right: &str| {
            let cols: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, cols.join(mid), right)
        };
        let row = |cells: [String; 5]| {
            let cols: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| format!(" {} ", fit_width(cell, *w)))
                .collect();
            format!("│{}│", cols.join("│"))
        };

        let mut lines = vec![
            rule("┌", "┬", "┐"),
            row(["Name", "Difficulty", "Cuisine", "Dietary", "Time"].map(String::from)),
            rule("├", "┼", "┤"),
        ];

        for recipe in recipes {
            lines.push(row([
                truncate_string(recipe.name(), name_width),
                recipe.difficulty().to_string(),
                truncate_string(recipe.cuisine_type(), cuisine_width),
                truncate_string(recipe.dietary_preferences(), dietary_width),
                format!("{} min", recipe.cooking_time() + recipe.prep_time()),
            ]));
        }

        lines.push(rule("└", "┴", "┘"));
        lines
    }

    pub fn json_list(recipes: &[&Recipe]) -> Result<String> {
        serde_json::to_string_pretty(recipes).context("Failed to serialize recipes to JSON")
    }
}

/// Plain-text detail of one recipe, wrapped to `width` columns
pub fn recipe_detail_lines(recipe: &Recipe, width: usize) -> Vec<String> {
    wrap_text(&crate::utils::format::recipe_detail_text(recipe), width)
}
