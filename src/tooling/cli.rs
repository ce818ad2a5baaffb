//! CLI Tooling
//!
//! Command-line surface for the attribution run. Invoked with no arguments it
//! works against the current directory with the built-in identity.

use crate::config::{AttributionConfig, ConfigLoader, WORKSPACE_CONFIG_FILE};
use crate::error::AttributionError;
use crate::logging::LoggingConfig;
use crate::updater::{RegistryAttributionUpdater, UpdateReport, UpdaterSettings};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Rewrite author attribution in registry.json and per-agent metadata files
#[derive(Parser, Debug)]
#[command(name = "update-registry")]
#[command(about = "Rewrite author attribution in registry.json and per-agent metadata files")]
pub struct Cli {
    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold logging flags over the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "info".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// CLI context: resolved workspace and configuration for one invocation.
pub struct CliContext {
    workspace_root: PathBuf,
    config: AttributionConfig,
    config_source: Option<PathBuf>,
}

impl CliContext {
    /// Create a new CLI context, loading configuration for the workspace.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
    ) -> Result<Self, AttributionError> {
        if !workspace_root.is_dir() {
            return Err(AttributionError::ConfigError(format!(
                "Workspace is not a directory: {}",
                workspace_root.display()
            )));
        }

        let (config, config_source) = match config_path {
            Some(path) => (ConfigLoader::load_from_file(&path)?, Some(path)),
            None => {
                let workspace_file = workspace_root.join(WORKSPACE_CONFIG_FILE);
                let source = workspace_file.is_file().then_some(workspace_file);
                (ConfigLoader::load(&workspace_root)?, source)
            }
        };

        Ok(Self {
            workspace_root,
            config,
            config_source,
        })
    }

    /// Build a context from an already-loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: AttributionConfig) -> Self {
        Self {
            workspace_root,
            config,
            config_source: None,
        }
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &AttributionConfig {
        &self.config
    }

    /// Config file that was merged over the defaults, if any.
    ///
    /// Configuration is loaded before logging exists, so the binary reports
    /// this once the subscriber is installed.
    pub fn config_source(&self) -> Option<&Path> {
        self.config_source.as_deref()
    }

    /// Run the attribution pass, printing progress lines to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<UpdateReport, AttributionError> {
        let settings = UpdaterSettings::from_config(&self.config, &self.workspace_root);
        info!(
            workspace = %self.workspace_root.display(),
            author = %settings.author,
            "Executing attribution run"
        );
        RegistryAttributionUpdater::new(settings).run(out)
    }
}
