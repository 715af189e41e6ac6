//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parts_catalog::{Currency, SearchConfig};
use serde::{Deserialize, Serialize};

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["parts.toml", ".parts.toml", "parts.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog data source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search tunables, passed through to the catalog.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The configured quote currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.catalog.currency)
            .with_context(|| format!("Unknown currency: {}", self.catalog.currency))
    }
}

/// Where the catalog data lives and how prices are quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file, relative to the config file's directory.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,

    /// ISO currency code for order quotes.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            currency: default_currency(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default parts.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Parts catalog configuration

[catalog]
path = "{catalog_path}"
currency = "EGP"

[search]
suggestion_min_len = 2
suggestion_limit = 10
suggestion_product_sample = 5
popular_per_source = 5
popular_limit = 10

[search.weights]
name_contains = 10
name_prefix = 5
description_contains = 3
brand_contains = 8
brand_exact = 5
model_contains = 8
model_exact = 5
category_contains = 5
"#,
        catalog_path = catalog_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config("catalog.json")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [catalog]
            currency = "usd"

            [search]
            suggestion_limit = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, PathBuf::from("catalog.json"));
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.search.suggestion_limit, 3);
        assert_eq!(config.search.popular_limit, 10);
    }

    #[test]
    fn test_unknown_currency() {
        let mut config = CliConfig::default();
        config.catalog.currency = "XYZ".to_string();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.catalog.path = PathBuf::from("data/parts.json");
        config.search.weights.brand_exact = 7;

        for name in ["parts.toml", "parts.json"] {
            let path = dir.path().join(name);
            config.save(&path).unwrap();
            assert_eq!(CliConfig::load(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(dir.path().join("parts.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
