//! Mobile service configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the local database file.
pub const DB_PATH_VAR: &str = "NUTRIO_DB_PATH";

/// Environment variable holding the hosted catalog URL.
pub const CATALOG_URL_VAR: &str = "NUTRIO_CATALOG_URL";

/// Environment variable bounding the hosted catalog pool.
pub const CATALOG_MAX_CONNECTIONS_VAR: &str = "NUTRIO_CATALOG_MAX_CONNECTIONS";

/// Mobile service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Local SQLite file holding settings (and the development catalog)
    pub db_path: PathBuf,

    /// Postgres URL of the hosted catalog; `None` reads the local catalog
    pub catalog_url: Option<String>,

    /// Pool size for the hosted catalog (default: 5)
    pub catalog_max_connections: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = match var(DB_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let catalog_max_connections = var(CATALOG_MAX_CONNECTIONS_VAR)
            .unwrap_or_else(|| "5".to_string())
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::InvalidValue(CATALOG_MAX_CONNECTIONS_VAR.to_string()))?;

        Ok(AppConfig {
            db_path,
            catalog_url: var(CATALOG_URL_VAR),
            catalog_max_connections,
        })
    }

    /// Returns true when the catalog is read from the hosted database.
    pub fn uses_remote_catalog(&self) -> bool {
        self.catalog_url.is_some()
    }
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/app.nutrio.Nutrio/nutrio.db`
/// - **Windows**: `%APPDATA%\nutrio\Nutrio\data\nutrio.db`
/// - **Linux**: `~/.local/share/nutrio/nutrio.db`
///
/// The directory is created if it doesn't exist.
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("app", "nutrio", "Nutrio").ok_or(ConfigError::MissingDataDir)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .map_err(|e| ConfigError::DataDirUnavailable(e.to_string()))?;

    Ok(data_dir.join("nutrio.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    MissingDataDir,

    #[error("App data directory unavailable: {0}")]
    DataDirUnavailable(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
