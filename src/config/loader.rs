//! Config file source: reads and writes cluster configs as JSON or YAML.
//!
//! The format is picked from the file extension: `.json` is JSON, everything else is YAML.

use super::{default_cluster_config, ClusterConfig};
use crate::error::GeneratorError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// On-disk encoding of a cluster config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Select the format for a path by its extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Loads and saves [`ClusterConfig`] documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a cluster config from `path`.
    ///
    /// A missing file is reported as [`GeneratorError::ConfigNotFound`]; malformed content,
    /// or content that does not match the config shape, as [`GeneratorError::ConfigParse`].
    pub fn load_from_file(path: &Path) -> Result<ClusterConfig, GeneratorError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GeneratorError::ConfigNotFound(path.to_path_buf()),
            _ => GeneratorError::io(path, e),
        })?;

        let format = ConfigFormat::from_path(path);
        debug!(config_path = %path.display(), ?format, "Parsing cluster configuration");

        Self::parse_str(&contents, format).map_err(|message| GeneratorError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse an in-memory document; the error is the parser diagnostic.
    pub fn parse_str(contents: &str, format: ConfigFormat) -> Result<ClusterConfig, String> {
        match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Serialize `config` in the given format.
    pub fn to_string(config: &ClusterConfig, format: ConfigFormat) -> Result<String, GeneratorError> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| GeneratorError::Serialize(e.to_string())),
            ConfigFormat::Yaml => {
                serde_yaml::to_string(config).map_err(|e| GeneratorError::Serialize(e.to_string()))
            }
        }
    }

    /// Write `config` to `path`, choosing the format from the extension.
    pub fn save_to_file(config: &ClusterConfig, path: &Path) -> Result<(), GeneratorError> {
        let contents = Self::to_string(config, ConfigFormat::from_path(path))?;
        std::fs::write(path, contents).map_err(|e| GeneratorError::io(path, e))?;
        info!(config_path = %path.display(), "Cluster configuration written");
        Ok(())
    }

    /// Write the built-in defaults to `path` for later editing.
    pub fn save_default(path: &Path) -> Result<(), GeneratorError> {
        Self::save_to_file(&default_cluster_config(), path)
    }
}
