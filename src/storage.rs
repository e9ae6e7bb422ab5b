use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the catalog fixture
///
/// The catalog is read once at startup. Nothing is ever written back: the
/// only runtime mutation (resource completion) lives in memory for the
/// session.
pub struct Storage {
    file_path: Option<PathBuf>,
}

impl Storage {
    /// Read the catalog from `file_path`, or use the built-in sample catalog
    /// when no path is given
    pub fn new(file_path: Option<&Path>) -> Self {
        Self {
            file_path: file_path.map(Path::to_path_buf),
        }
    }

    /// Storage backed by the built-in sample catalog
    pub fn builtin() -> Self {
        Self { file_path: None }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn load(&self) -> Result<Catalog> {
        let Some(path) = &self.file_path else {
            tracing::info!("Loading built-in sample catalog");
            return Catalog::seed().context("Built-in sample catalog is invalid");
        };

        tracing::info!(path = %path.display(), "Loading catalog file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Catalog::from_toml(&content)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?;
        tracing::debug!(
            courses = catalog.courses.len(),
            categories = catalog.categories.len(),
            resource_sets = catalog.resource_sets.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}
