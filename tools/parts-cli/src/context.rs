//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use parts_catalog::Catalog;
use parts_store::MemoryStore;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_file: Option<PathBuf>,
    /// Catalog file given on the command line.
    pub catalog_override: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, catalog: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (CliConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_file {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        let catalog_override = catalog.map(|path| resolve(&cwd, Path::new(path)));

        Ok(Self {
            config,
            config_file,
            catalog_override,
            output,
            cwd,
        })
    }

    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_file
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Catalog file path, preferring the command line override.
    pub fn catalog_path(&self) -> PathBuf {
        match &self.catalog_override {
            Some(path) => path.clone(),
            None => resolve(self.base_dir(), &self.config.catalog.path),
        }
    }

    /// Read the catalog file into an in-memory store and wrap it.
    pub fn open_catalog(&self) -> Result<Catalog<MemoryStore>> {
        let path = self.catalog_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let store = MemoryStore::from_json(&content)
            .with_context(|| format!("Invalid catalog data: {}", path.display()))?;

        tracing::debug!(path = %path.display(), tables = store.tables().count(), "opened catalog");

        Ok(Catalog::with_config(store, self.config.search.clone())
            .with_currency(self.config.currency()?))
    }
}

/// Find a config file in the directory tree, starting at `start`.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(&config_path) {
                    Ok(config) => return Some((config, config_path)),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), "skipping config: {:#}", e)
                    }
                }
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_catalog::ProductId;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("parts.toml"),
            "[catalog]\npath = \"data/catalog.json\"\n",
        )
        .unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(path, dir.path().join("parts.toml"));
        assert_eq!(config.catalog.path, PathBuf::from("data/catalog.json"));
    }

    #[test]
    fn test_catalog_path_is_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context {
            config: CliConfig::default(),
            config_file: Some(dir.path().join("parts.toml")),
            catalog_override: None,
            output: Output::new(false, false),
            cwd: PathBuf::from("/somewhere/else"),
        };
        assert_eq!(ctx.catalog_path(), dir.path().join("catalog.json"));

        let ctx = Context {
            catalog_override: Some(PathBuf::from("/data/other.json")),
            ..ctx
        };
        assert_eq!(ctx.catalog_path(), PathBuf::from("/data/other.json"));
    }

    #[test]
    fn test_open_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"{"products": [{"id": 1, "name": "Oil Filter", "price": 12.5}]}"#,
        )
        .unwrap();
        let ctx = Context {
            config: CliConfig::default(),
            config_file: None,
            catalog_override: None,
            output: Output::new(false, false),
            cwd: dir.path().to_path_buf(),
        };

        let catalog = ctx.open_catalog().unwrap();
        assert_eq!(catalog.product(ProductId::new(1)).unwrap().name, "Oil Filter");
    }

    #[test]
    fn test_open_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context {
            config: CliConfig::default(),
            config_file: None,
            catalog_override: None,
            output: Output::new(false, false),
            cwd: dir.path().to_path_buf(),
        };

        let err = ctx.open_catalog().err().unwrap();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
