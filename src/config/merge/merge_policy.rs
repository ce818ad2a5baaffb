//! Built-in defaults as the lowest-precedence layer.

use crate::config::AttributionConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder seeded with `AttributionConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&AttributionConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
