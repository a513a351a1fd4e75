//! Module catalog: which question banks the app offers.
//!
//! ```json
//! {
//!   "part_size": 30,
//!   "modules": [
//!     { "name": "Module 1: Data literacy", "file": "DB/md1.csv" }
//!   ]
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default number of questions per part.
pub const DEFAULT_PART_SIZE: usize = 30;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no modules configured")]
    Empty,
    #[error("part size must be at least 1")]
    InvalidPartSize,
}

/// A subject area backed by one data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub file: PathBuf,
}

impl ModuleConfig {
    /// Module named after the file stem.
    pub fn from_path(file: PathBuf) -> Self {
        let name = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        Self { name, file }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_part_size")]
    pub part_size: usize,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

fn default_part_size() -> usize {
    DEFAULT_PART_SIZE
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            part_size: DEFAULT_PART_SIZE,
            modules: Vec::new(),
        }
    }
}

impl Catalog {
    /// Loads a catalog file. Relative module paths resolve against its directory.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::from_json_str(&content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            catalog.resolve_relative_to(base);
        }
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for module in &mut self.modules {
            if module.file.is_relative() {
                module.file = base.join(&module.file);
            }
        }
    }

    pub fn add_module(&mut self, module: ModuleConfig) {
        self.modules.push(module);
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.part_size == 0 {
            return Err(CatalogError::InvalidPartSize);
        }
        if self.modules.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(())
    }
}
