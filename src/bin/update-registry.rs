//! update-registry binary
//!
//! Rewrites attribution in the workspace's registry and metadata files.

use anyhow::Context;
use clap::Parser;
use registry_attribution::logging::init_logging;
use registry_attribution::tooling::cli::{Cli, CliContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .context("Error initializing workspace")?;

    init_logging(&cli.logging_config(&context.config().logging))
        .context("Error initializing logging")?;

    match context.config_source() {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded configuration file"),
        None => tracing::debug!("No configuration file, using defaults"),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    context.execute(&mut out).with_context(|| {
        format!(
            "Failed to update registry in {}",
            context.workspace_root().display()
        )
    })?;

    Ok(())
}
