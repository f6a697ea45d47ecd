//! Optional TOML configuration file
//!
//! Lookup order: `--config PATH`, else `./usuarios.toml` when present,
//! else built-in defaults. Command-line flags and `USUARIOS_*`
//! environment variables override whatever the file sets.
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! database = "/var/lib/usuarios/usuarios.db"
//! timeout_secs = 10
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use usuarios_server::ServerConfig;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "usuarios.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind: Option<SocketAddr>,
    pub database: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load the explicit config file, or the default one if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means "use defaults".
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    /// Merge with command-line values (which win) on top of the defaults.
    pub fn resolve(
        &self,
        bind: Option<SocketAddr>,
        database: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> ServerConfig {
        let defaults = ServerConfig::default();

        ServerConfig {
            bind_addr: bind.or(self.bind).unwrap_or(defaults.bind_addr),
            database_path: database
                .or_else(|| self.database.clone())
                .unwrap_or(defaults.database_path),
            request_timeout: timeout_secs
                .or(self.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}
