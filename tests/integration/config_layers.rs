use serde_json::json;
use std::fs;
use tempfile::TempDir;

use registry_attribution::config::{AttributionConfig, WORKSPACE_CONFIG_FILE};
use registry_attribution::timestamp::Clock;
use registry_attribution::tooling::cli::CliContext;

use crate::integration::support::{read_json, run, write_registry};

#[test]
fn workspace_config_redirects_identity_and_paths() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(WORKSPACE_CONFIG_FILE),
        r#"
[identity]
author = "maintainers"
homepage = "https://example.org/agents"

[paths]
registry = "data/index.json"
metadata_root = "catalog"
metadata_file = "meta.json"

[timestamp]
clock = "utc"
"#,
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(
        temp.path().join("data/index.json"),
        json!({"agents": {"x": {}}}).to_string(),
    )
    .unwrap();
    fs::create_dir_all(temp.path().join("catalog/x")).unwrap();
    fs::write(temp.path().join("catalog/x/meta.json"), "{}").unwrap();

    let (report, stdout) = run(temp.path()).unwrap();

    assert_eq!(report.metadata_updated, vec!["x".to_string()]);
    let registry = read_json(&temp.path().join("data/index.json"));
    assert_eq!(registry["agents"]["x"]["author"], "maintainers");
    let meta = read_json(&temp.path().join("catalog/x/meta.json"));
    assert_eq!(meta["homepage"], "https://example.org/agents");
    assert!(stdout.ends_with("All agents now attributed to maintainers\n"));
}

#[test]
fn explicit_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    fs::write(&config_path, "[identity]\nauthor = \"elsewhere\"\n").unwrap();
    let registry_path = write_registry(temp.path(), &json!({"agents": {"a": {}}}));

    let cli = CliContext::new(temp.path().to_path_buf(), Some(config_path)).unwrap();
    let mut out = Vec::new();
    cli.execute(&mut out).unwrap();

    assert_eq!(read_json(&registry_path)["agents"]["a"]["author"], "elsewhere");
}

#[test]
fn invalid_workspace_config_is_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(WORKSPACE_CONFIG_FILE),
        "[paths]\nmetadata_file = \"../escape.json\"\n",
    )
    .unwrap();
    write_registry(temp.path(), &json!({"agents": {}}));

    assert!(run(temp.path()).is_err());
}

#[test]
fn context_from_loaded_config() {
    let temp = TempDir::new().unwrap();
    let registry_path = write_registry(temp.path(), &json!({"agents": {"a": {}}}));
    let mut config = AttributionConfig::default();
    config.timestamp.clock = Clock::Utc;

    let cli = CliContext::with_config(temp.path().to_path_buf(), config);
    let mut out = Vec::new();
    let report = cli.execute(&mut out).unwrap();

    assert_eq!(
        read_json(&registry_path)["lastUpdated"],
        report.last_updated.as_str()
    );
}
