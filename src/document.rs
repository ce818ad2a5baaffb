//! JSON document I/O shared by the registry and metadata files.
//!
//! Documents are read whole, parsed into `serde_json::Value` (object key order
//! preserved), and written back pretty-printed with two-space indentation.
//! Non-ASCII text is emitted literally, and numbers keep their source text
//! (`arbitrary_precision`), so integers beyond 64 bits survive unchanged.

use crate::error::AttributionError;
use serde_json::{Map, Value};
use std::path::Path;

/// Read and parse a JSON document.
pub fn read_document(path: &Path) -> Result<Value, AttributionError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AttributionError::from_read(path, e))?;
    serde_json::from_str(&content).map_err(|source| AttributionError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document to its on-disk text form.
pub fn render_document(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Serialize and overwrite `path`.
pub fn write_document(path: &Path, value: &Value) -> Result<(), AttributionError> {
    let content = render_document(value).map_err(|e| AttributionError::WriteError {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    std::fs::write(path, content).map_err(|source| AttributionError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Wrote document");
    Ok(())
}

/// Borrow the top-level object of a document.
pub fn as_object_mut<'a>(
    value: &'a mut Value,
    path: &Path,
) -> Result<&'a mut Map<String, Value>, AttributionError> {
    value
        .as_object_mut()
        .ok_or_else(|| AttributionError::invalid(path, "top-level value is not an object"))
}
