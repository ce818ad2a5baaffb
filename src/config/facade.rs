//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::AttributionConfig;
use crate::error::AttributionError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the workspace file and environment, then validate.
    pub fn load(workspace_root: &Path) -> Result<AttributionConfig, AttributionError> {
        let config = MergeService::load(workspace_root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, then validate.
    pub fn load_from_file(path: &Path) -> Result<AttributionConfig, AttributionError> {
        if !path.exists() {
            return Err(AttributionError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> AttributionConfig {
        AttributionConfig::default()
    }
}
