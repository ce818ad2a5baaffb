use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use registry_attribution::tooling::cli::CliContext;
use registry_attribution::{AttributionError, UpdateReport};

pub const AUTHOR: &str = "wshobson";
pub const HOMEPAGE: &str = "https://github.com/wshobson/agents";

pub fn write_registry(workspace: &Path, value: &Value) -> PathBuf {
    let path = workspace.join("registry.json");
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Create `agents/wshobson/<name>/` and optionally a metadata file inside it.
pub fn create_agent_dir(workspace: &Path, name: &str, metadata: Option<&str>) -> PathBuf {
    let dir = workspace.join("agents").join("wshobson").join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(content) = metadata {
        fs::write(dir.join("metadata.json"), content).unwrap();
    }
    dir
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Run the CLI context against `workspace`, returning the report and stdout text.
pub fn run(workspace: &Path) -> Result<(UpdateReport, String), AttributionError> {
    let cli = CliContext::new(workspace.to_path_buf(), None)?;
    let mut out = Vec::new();
    let report = cli.execute(&mut out)?;
    Ok((report, String::from_utf8(out).unwrap()))
}
