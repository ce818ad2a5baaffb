//! Agent registry document.
//!
//! The registry is a single JSON object with an `agents` mapping (agent id to
//! record) and a `lastUpdated` marker. Only `agents.*.author` and
//! `lastUpdated` are touched; everything else is carried through verbatim.

use crate::document::{as_object_mut, read_document, write_document};
use crate::error::AttributionError;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const AGENTS_KEY: &str = "agents";
pub const LAST_UPDATED_KEY: &str = "lastUpdated";
pub const AUTHOR_KEY: &str = "author";

/// A loaded registry, bound to the path it was read from.
#[derive(Debug, Clone)]
pub struct RegistryDocument {
    path: PathBuf,
    value: Value,
}

impl RegistryDocument {
    /// Load the registry. Absence is `FileNotFound`, bad JSON is `ParseError`.
    pub fn load(path: &Path) -> Result<Self, AttributionError> {
        let value = read_document(path)?;
        if !value.is_object() {
            return Err(AttributionError::invalid(
                path,
                "top-level value is not an object",
            ));
        }
        tracing::debug!(path = %path.display(), "Loaded registry");
        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Number of entries in `agents`, or 0 when the mapping is absent.
    pub fn agent_count(&self) -> usize {
        self.value
            .get(AGENTS_KEY)
            .and_then(Value::as_object)
            .map(|agents| agents.len())
            .unwrap_or(0)
    }

    /// Set `author` on every agent record, creating the field where missing.
    ///
    /// Returns the number of records touched.
    pub fn attribute_agents(&mut self, author: &str) -> Result<usize, AttributionError> {
        let path = self.path.clone();
        let root = as_object_mut(&mut self.value, &path)?;
        let agents = root
            .get_mut(AGENTS_KEY)
            .ok_or_else(|| AttributionError::invalid(&path, "missing `agents` mapping"))?
            .as_object_mut()
            .ok_or_else(|| AttributionError::invalid(&path, "`agents` is not an object"))?;

        for (agent_id, record) in agents.iter_mut() {
            let record = record.as_object_mut().ok_or_else(|| {
                AttributionError::invalid(&path, format!("agent `{}` is not an object", agent_id))
            })?;
            record.insert(AUTHOR_KEY.to_string(), Value::String(author.to_string()));
        }

        tracing::debug!(count = agents.len(), author, "Attributed registry agents");
        Ok(agents.len())
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.value.get(LAST_UPDATED_KEY).and_then(Value::as_str)
    }

    /// Overwrite `lastUpdated`.
    pub fn stamp(&mut self, timestamp: &str) -> Result<(), AttributionError> {
        let path = self.path.clone();
        let root = as_object_mut(&mut self.value, &path)?;
        root.insert(
            LAST_UPDATED_KEY.to_string(),
            Value::String(timestamp.to_string()),
        );
        Ok(())
    }

    /// Write the registry back to the path it was loaded from.
    pub fn save(&self) -> Result<(), AttributionError> {
        write_document(&self.path, &self.value)
    }
}
