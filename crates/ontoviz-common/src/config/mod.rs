//! Configuration loading for ontoviz.
//! Reads ontoviz.toml from the current directory or the path in the ONTOVIZ_CONFIG env var.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{OntovizError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ONTOVIZ_CONFIG";

/// Config file looked up in the working directory when `ONTOVIZ_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ontoviz.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Locations of the two input tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_tree_file")]
    pub tree_file: PathBuf,
    #[serde(default = "default_labels_file")]
    pub labels_file: PathBuf,
}

fn default_tree_file()   -> PathBuf { PathBuf::from("data/tree.csv") }
fn default_labels_file() -> PathBuf { PathBuf::from("data/labels.csv") }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            tree_file: default_tree_file(),
            labels_file: default_labels_file(),
        }
    }
}

/// Asset directories default to their location in the workspace, so the
/// defaults resolve when the server runs from the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_host()          -> String  { "0.0.0.0".to_string() }
fn default_port()          -> u16     { 5002 }
fn default_static_dir()    -> PathBuf { PathBuf::from("crates/ontoviz-web/static") }
fn default_templates_dir() -> PathBuf { PathBuf::from("crates/ontoviz-web/templates") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl Config {
    /// Load configuration.
    /// Checks ONTOVIZ_CONFIG first, then ontoviz.toml, then falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            Err(_) => {
                info!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OntovizError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| OntovizError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| OntovizError::Config(e.to_string()))
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            OntovizError::Config(format!("invalid server.host: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[cfg(test)]
mod tests;
