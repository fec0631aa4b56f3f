//! # Configuration
//!
//! Where compiled mission documents are written.
//!
//! ```toml
//! # kerneldb.toml
//! db_dir = "SpiceQL/db"
//! extension = "json"
//! ```
//!
//! Precedence, highest first: `--db-dir`, `KERNELDB_DB_DIR`, the config file,
//! built-in defaults. Without `--config`, `kerneldb.toml` in the working
//! directory is used when present.

use kerneldb_core::KernelDbError;
use kerneldb_core::formats::DEFAULT_EXTENSION;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kerneldb.toml";

/// Environment variable overriding the output directory.
pub const DB_DIR_ENV: &str = "KERNELDB_DB_DIR";

/// Default output directory.
pub const DEFAULT_DB_DIR: &str = "db";

/// Output settings of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory receiving `<mission>.<extension>` files.
    pub db_dir: PathBuf,
    /// Extension of written files, without the dot.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_dir: PathBuf::from(DEFAULT_DB_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, KernelDbError> {
        let config: Self =
            toml::from_str(text).map_err(|e| KernelDbError::ConfigError(e.to_string()))?;
        if config.extension.is_empty() || config.extension.contains(['/', '\\']) {
            return Err(KernelDbError::ConfigError(format!(
                "Invalid extension: {:?}",
                config.extension
            )));
        }
        Ok(config)
    }

    /// Load the config file, or the defaults when there is none.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, KernelDbError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|e| {
            KernelDbError::ConfigError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply an output directory override, if any.
    #[must_use]
    pub fn with_db_dir(mut self, db_dir: Option<PathBuf>) -> Self {
        if let Some(db_dir) = db_dir.filter(|d| !d.as_os_str().is_empty()) {
            self.db_dir = db_dir;
        }
        self
    }

    /// Load and apply every override in precedence order.
    pub fn resolve(path: Option<&Path>, cli_db_dir: Option<PathBuf>) -> Result<Self, KernelDbError> {
        let env_db_dir = std::env::var_os(DB_DIR_ENV).map(PathBuf::from);
        Ok(Self::load(path)?.with_db_dir(env_db_dir).with_db_dir(cli_db_dir))
    }

    /// Output file of a mission.
    #[must_use]
    pub fn output_path(&self, mission: &str) -> PathBuf {
        self.db_dir.join(format!("{}.{}", mission, self.extension))
    }
}
