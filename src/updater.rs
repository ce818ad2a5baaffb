//! Registry Attribution Updater
//!
//! Runs one attribution pass over the workspace: registry agents first, then
//! every discovered metadata file, then the registry timestamp and save.
//! Progress lines go to the caller's writer as each step completes, so a
//! fatal error part-way through still leaves an accurate record of which
//! metadata files were already rewritten.

use crate::config::AttributionConfig;
use crate::error::AttributionError;
use crate::metadata::{discover_metadata, MetadataDocument};
use crate::registry::RegistryDocument;
use crate::timestamp::Clock;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct UpdaterSettings {
    pub registry_path: PathBuf,
    pub metadata_root: PathBuf,
    pub metadata_file: String,
    pub author: String,
    pub homepage: String,
    pub clock: Clock,
}

impl UpdaterSettings {
    /// Resolve configured paths against `workspace_root`.
    pub fn from_config(config: &AttributionConfig, workspace_root: &Path) -> Self {
        let (registry_path, metadata_root) = config.paths.resolve(workspace_root);
        Self {
            registry_path,
            metadata_root,
            metadata_file: config.paths.metadata_file.clone(),
            author: config.identity.author.clone(),
            homepage: config.identity.homepage.clone(),
            clock: config.timestamp.clock,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Entries in the registry's `agents` mapping
    pub agents_processed: usize,
    /// Agent directories whose metadata file was rewritten, in processing order
    pub metadata_updated: Vec<String>,
    /// Value written to `lastUpdated`
    pub last_updated: String,
}

pub struct RegistryAttributionUpdater {
    settings: UpdaterSettings,
}

impl RegistryAttributionUpdater {
    pub fn new(settings: UpdaterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &UpdaterSettings {
        &self.settings
    }

    /// Perform the full pass, writing progress lines to `out`.
    ///
    /// The registry is loaded before anything is written, so a missing or
    /// malformed registry leaves every file untouched. A bad metadata file
    /// aborts the run after earlier metadata files were already saved.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<UpdateReport, AttributionError> {
        let settings = &self.settings;
        info!(registry = %settings.registry_path.display(), "Starting attribution run");

        let mut registry = RegistryDocument::load(&settings.registry_path)?;
        registry.attribute_agents(&settings.author)?;

        let mut metadata_updated = Vec::new();
        for target in discover_metadata(&settings.metadata_root, &settings.metadata_file)? {
            let mut document = MetadataDocument::load(&target.path)?;
            document.attribute(&settings.author, &settings.homepage)?;
            document.save()?;
            info!(agent = %target.agent_dir, "Updated metadata");
            emit(out, &format!("Updated metadata for {}", target.agent_dir))?;
            metadata_updated.push(target.agent_dir);
        }

        let last_updated = settings.clock.now();
        registry.stamp(&last_updated)?;
        registry.save()?;

        let agents_processed = registry.agent_count();
        info!(
            agents = agents_processed,
            metadata = metadata_updated.len(),
            "Attribution run complete"
        );
        emit(
            out,
            &format!("Registry updated with {} agents", agents_processed),
        )?;
        emit(
            out,
            &format!("All agents now attributed to {}", settings.author),
        )?;

        Ok(UpdateReport {
            agents_processed,
            metadata_updated,
            last_updated,
        })
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), AttributionError> {
    writeln!(out, "{}", line).map_err(|source| AttributionError::WriteError {
        path: PathBuf::from("<stdout>"),
        source,
    })
}
