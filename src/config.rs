use crate::core::data::{ALL, Difficulty, FacetKind};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub facets: FacetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Base directory that recipe image paths are resolved against
    pub assets_dir: PathBuf,
    pub color: bool,
    pub content_preview: bool,
    pub preview_length: usize,
}

/// Sizes of rendered images, in terminal cells
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub thumbnail_width: u16,
    pub thumbnail_height: u16,
    pub detail_image_width: u16,
    pub detail_image_height: u16,
}

/// Choices offered by the cuisine and dietary filters (besides "All")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetConfig {
    pub cuisines: Vec<String>,
    pub dietary: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("."),
            color: true,
            content_preview: true,
            preview_length: 100,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: 16,
            thumbnail_height: 8,
            detail_image_width: 40,
            detail_image_height: 20,
        }
    }
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            cuisines: ["Italian", "Chinese", "Indian", "Mexican"]
                .map(String::from)
                .to_vec(),
            dietary: ["Gluten-Free", "Vegan", "Vegetarian"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl FacetConfig {
    /// Selectable values for a facet, always starting with "All"
    pub fn options(&self, kind: FacetKind) -> Vec<String> {
        let rest: Vec<String> = match kind {
            FacetKind::Difficulty => Difficulty::VARIANTS
                .iter()
                .map(|d| d.as_str().to_string())
                .collect(),
            FacetKind::Cuisine => self.cuisines.clone(),
            FacetKind::Dietary => self.dietary.clone(),
        };

        std::iter::once(ALL.to_string()).chain(rest).collect()
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let display = &self.display;
        if display.thumbnail_width == 0
            || display.thumbnail_height == 0
            || display.detail_image_width == 0
            || display.detail_image_height == 0
        {
            return Err(AppError::Config(
                "Image dimensions must be greater than zero".to_string(),
            ));
        }

        for (name, values) in [("cuisines", &self.facets.cuisines), ("dietary", &self.facets.dietary)] {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(AppError::Config(format!(
                    "Facet list '{}' cannot contain empty values",
                    name
                )));
            }
            if values.iter().any(|v| v == ALL) {
                return Err(AppError::Config(format!(
                    "Facet list '{}' cannot contain the reserved value '{}'",
                    name, ALL
                )));
            }
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Resolve a recipe image path against the assets directory
    pub fn resolve_asset(&self, image_path: &str) -> PathBuf {
        self.general.assets_dir.join(image_path)
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipe-library")
            .join("config.toml")
    }
}
