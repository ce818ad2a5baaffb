//! Per-agent metadata files.
//!
//! Each immediate child directory of the metadata root may hold one metadata
//! document. Discovery does not recurse, and a directory without the file is
//! simply not a target.

use crate::document::{as_object_mut, read_document, write_document};
use crate::error::AttributionError;
use crate::registry::AUTHOR_KEY;
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const HOMEPAGE_KEY: &str = "homepage";

/// A metadata file found under the metadata root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTarget {
    /// Name of the agent directory the file lives in
    pub agent_dir: String,
    pub path: PathBuf,
}

/// List immediate child directories of `root` that contain `file_name`.
///
/// A missing root yields an empty list; a root that exists but is not a
/// directory is an error. Children are tested with `Path::is_dir`, so a
/// symlink counts when it resolves to a directory and a dangling one is
/// skipped. Results are sorted by directory name.
pub fn discover_metadata(
    root: &Path,
    file_name: &str,
) -> Result<Vec<MetadataTarget>, AttributionError> {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "Metadata root absent, skipping");
        return Ok(Vec::new());
    }
    if !root.is_dir() {
        return Err(AttributionError::ReadError {
            path: root.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::Other,
                "metadata root is not a directory",
            ),
        });
    }

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut targets = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                tracing::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
            Err(e) => {
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                });
                return Err(AttributionError::ReadError {
                    path: root.to_path_buf(),
                    source,
                });
            }
        };

        if !entry.path().is_dir() {
            continue;
        }

        // Anything at this path is a target; a non-file fails on load.
        let path = entry.path().join(file_name);
        if !path.exists() {
            tracing::debug!(dir = %entry.path().display(), "No metadata file, skipping");
            continue;
        }

        let agent_dir = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                tracing::warn!("Agent directory name is not UTF-8: {:?}", entry.path());
                entry.file_name().to_string_lossy().into_owned()
            }
        };

        targets.push(MetadataTarget { agent_dir, path });
    }

    Ok(targets)
}

/// A loaded metadata document.
#[derive(Debug, Clone)]
pub struct MetadataDocument {
    path: PathBuf,
    value: Value,
}

impl MetadataDocument {
    pub fn load(path: &Path) -> Result<Self, AttributionError> {
        let value = read_document(path)?;
        if !value.is_object() {
            return Err(AttributionError::invalid(
                path,
                "top-level value is not an object",
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Overwrite `author` and `homepage`; other fields are left alone.
    pub fn attribute(&mut self, author: &str, homepage: &str) -> Result<(), AttributionError> {
        let path = self.path.clone();
        let root = as_object_mut(&mut self.value, &path)?;
        root.insert(AUTHOR_KEY.to_string(), Value::String(author.to_string()));
        root.insert(HOMEPAGE_KEY.to_string(), Value::String(homepage.to_string()));
        Ok(())
    }

    pub fn save(&self) -> Result<(), AttributionError> {
        write_document(&self.path, &self.value)
    }
}
