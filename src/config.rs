//! Configuration
//!
//! Layered settings for an attribution run. Every value has a built-in default
//! that reproduces the stock behavior, so a workspace without any config file
//! and a clean environment behaves exactly like the plain `update-registry`
//! invocation.

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::error::AttributionError;
use crate::logging::LoggingConfig;
use crate::timestamp::TimestampConfig;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Name of the optional per-workspace config file.
pub const WORKSPACE_CONFIG_FILE: &str = "attribution.toml";

/// Prefix for environment overrides, e.g. `ATTRIBUTION__IDENTITY__AUTHOR`.
pub const ENV_PREFIX: &str = "ATTRIBUTION";

fn default_author() -> String {
    "wshobson".to_string()
}

fn default_homepage() -> String {
    "https://github.com/wshobson/agents".to_string()
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("registry.json")
}

fn default_metadata_root() -> PathBuf {
    PathBuf::from("agents").join("wshobson")
}

fn default_metadata_file() -> String {
    "metadata.json".to_string()
}

/// Identity written into every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Maintainer identity stored in `author`
    #[serde(default = "default_author")]
    pub author: String,

    /// URL stored in each metadata file's `homepage`
    #[serde(default = "default_homepage")]
    pub homepage: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            homepage: default_homepage(),
        }
    }
}

/// Locations of the documents, relative to the workspace root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_registry_path")]
    pub registry: PathBuf,

    /// Directory whose immediate children are per-agent directories
    #[serde(default = "default_metadata_root")]
    pub metadata_root: PathBuf,

    /// File name looked up inside each per-agent directory
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
}

impl PathsConfig {
    /// Resolve registry path and metadata root against the workspace root.
    pub fn resolve(&self, workspace_root: &Path) -> (PathBuf, PathBuf) {
        (
            workspace_root.join(&self.registry),
            workspace_root.join(&self.metadata_root),
        )
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            registry: default_registry_path(),
            metadata_root: default_metadata_root(),
            metadata_file: default_metadata_file(),
        }
    }
}

/// Complete configuration for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributionConfig {
    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub timestamp: TimestampConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AttributionConfig {
    /// Reject values that would produce a broken run.
    pub fn validate(&self) -> Result<(), AttributionError> {
        if self.identity.author.trim().is_empty() {
            return Err(AttributionError::ConfigError(
                "identity.author must not be empty".to_string(),
            ));
        }
        if self.identity.homepage.trim().is_empty() {
            return Err(AttributionError::ConfigError(
                "identity.homepage must not be empty".to_string(),
            ));
        }
        if self.paths.registry.as_os_str().is_empty() {
            return Err(AttributionError::ConfigError(
                "paths.registry must not be empty".to_string(),
            ));
        }

        let file = Path::new(&self.paths.metadata_file);
        let mut components = file.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(AttributionError::ConfigError(format!(
                "paths.metadata_file must be a plain file name, got {:?}",
                self.paths.metadata_file
            ))),
        }
    }
}
