//! Configuration management for database and identity settings.
//!
//! Settings come from an optional `orbit.toml` next to the working
//! directory (path overridable via `ORBIT_CONFIG`), with environment
//! variables taking precedence over the file.

/// Database connection and schema creation
pub mod database;
/// Signed-in profile from config or environment variables
pub mod identity;

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Error, Result};

const CONFIG_PATH_ENV_VAR: &str = "ORBIT_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "orbit.toml";

/// Application configuration as read from `orbit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database connection string; `DATABASE_URL` wins over this.
    pub database_url: Option<String>,
    /// Signed-in profile; `ORBIT_USER_*` variables win over this.
    pub identity: Option<identity::IdentityProfile>,
}

impl AppConfig {
    /// Loads the config file named by `ORBIT_CONFIG` (default
    /// `orbit.toml`). A missing file is fine - everything can come from the
    /// environment.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Loads configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(file = %path.display(), "no config file; using environment only");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {e}", path.display()),
        })
    }

    /// Resolved database URL: environment, then file, then the default
    /// local SQLite file.
    #[must_use]
    pub fn database_url(&self) -> String {
        database::resolve_database_url(self.database_url.as_deref())
    }

    /// Resolved identity profile: environment, then file.
    #[must_use]
    pub fn identity(&self) -> Option<identity::IdentityProfile> {
        identity::from_env().or_else(|| self.identity.clone())
    }
}
