use crate::cli::{ListArgs, ListFormat};
use crate::config::Config;
use crate::core::data::{Facet, FacetKind, RecipeCatalog, RecipeQuery};
use crate::core::traits::RecipeSearch;
use crate::utils::output::DisplayFormatter;
use anyhow::Result;

pub fn handle_list_command(
    config: &Config,
    catalog: &RecipeCatalog,
    args: &ListArgs,
) -> Result<()> {
    let query = build_query(args);
    let recipes = catalog.filter(&query);

    tracing::info!(
        keywords = ?query.keywords,
        difficulty = query.difficulty.as_str(),
        cuisine = query.cuisine.as_str(),
        dietary = query.dietary.as_str(),
        results = recipes.len(),
        "Listed recipes"
    );

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    DisplayFormatter::format_list(&recipes, format, config)
}

/// Omitted options fall back to "All", like the browser's initial filters
pub fn build_query(args: &ListArgs) -> RecipeQuery {
    RecipeQuery::new(args.query.as_deref().unwrap_or(""))
        .with_facet(FacetKind::Difficulty, Facet::from_option(args.difficulty.as_deref()))
        .with_facet(FacetKind::Cuisine, Facet::from_option(args.cuisine.as_deref()))
        .with_facet(FacetKind::Dietary, Facet::from_option(args.dietary.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::BuiltinRecipes;

    fn names(catalog: &RecipeCatalog, args: &ListArgs) -> Vec<String> {
        catalog
            .filter(&build_query(args))
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    #[test]
    fn test_no_options_lists_everything() {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        assert_eq!(names(&catalog, &ListArgs::default()).len(), 14);
    }

    #[test]
    fn test_query_and_facets_combine() {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let args = ListArgs {
            query: Some("garlic".to_string()),
            cuisine: Some("Italian".to_string()),
            ..ListArgs::default()
        };
        assert_eq!(names(&catalog, &args), vec!["Spaghetti Bolognese", "Shrimp Scampi"]);
    }

    #[test]
    fn test_all_option_is_inactive() {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let args = ListArgs {
            difficulty: Some("All".to_string()),
            ..ListArgs::default()
        };
        assert_eq!(names(&catalog, &args).len(), 14);
    }

    #[test]
    fn test_facets_are_case_sensitive() {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let lower = ListArgs {
            difficulty: Some("easy".to_string()),
            ..ListArgs::default()
        };
        let exact = ListArgs {
            difficulty: Some("Easy".to_string()),
            ..ListArgs::default()
        };
        assert!(names(&catalog, &lower).is_empty());
        assert_eq!(names(&catalog, &exact).len(), 6);
    }
}
