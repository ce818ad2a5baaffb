//! Registry Attribution
//!
//! Rewrites author attribution across an agent registry (`registry.json`) and
//! the per-agent metadata files that sit next to each agent's directory.

pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod registry;
pub mod timestamp;
pub mod tooling;
pub mod updater;

pub use error::AttributionError;
pub use updater::{RegistryAttributionUpdater, UpdateReport, UpdaterSettings};
