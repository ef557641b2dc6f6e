// Catalog extension loading and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::catalog::{CatalogExtensions, WordCatalog};
use crate::utils::error::{DirgenError, Result};

const CONFIG_DIR: &str = ".dirgen";
const CONFIG_FILE: &str = "catalog.toml";

/// Loader for the optional, read-only catalog extension file.
///
/// The file adds custom categories, tech stacks and frameworks on top of
/// the built-in catalog. It is user-maintained; this tool only reads it.
pub struct CatalogSource;

impl CatalogSource {
    /// Default location of the catalog file: `~/.dirgen/catalog.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Build the working catalog: built-in data merged with the
    /// extension file. An explicit `path` must exist and parse; a missing
    /// file at the default location is not an error.
    pub fn load_catalog(path: Option<&Path>) -> Result<WordCatalog> {
        let mut catalog = WordCatalog::builtin();

        let extensions = match path {
            Some(path) => Self::load_extensions(path)?,
            None => match Self::default_path() {
                Some(ref default) if default.exists() => Self::load_extensions(default)?,
                _ => CatalogExtensions::default(),
            },
        };

        if !extensions.is_empty() {
            debug!(
                categories = extensions.categories.len(),
                stacks = extensions.tech_stacks.len(),
                "merging catalog extensions"
            );
            catalog.merge(extensions);
        }

        Ok(catalog)
    }

    /// Load and parse an extension file.
    pub fn load_extensions<P: AsRef<Path>>(path: P) -> Result<CatalogExtensions> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DirgenError::Config(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DirgenError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_extensions(&content)
    }

    /// Parse catalog extensions from a TOML string.
    pub fn parse_extensions(content: &str) -> Result<CatalogExtensions> {
        let extensions: CatalogExtensions = toml::from_str(content)
            .map_err(|e| DirgenError::Config(format!("invalid TOML syntax: {e}")))?;

        for entry in &extensions.tech_stacks {
            if entry.code.is_empty() {
                return Err(DirgenError::Config(
                    "tech stack entries need a non-empty code".to_string(),
                ));
            }
        }

        Ok(extensions)
    }
}
