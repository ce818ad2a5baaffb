use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

use crate::integration::support::{create_agent_dir, read_json, run, write_registry, AUTHOR};

#[test]
fn second_run_only_changes_last_updated() {
    let temp = TempDir::new().unwrap();
    let registry_path = write_registry(
        temp.path(),
        &json!({"agents": {"a": {"author": "x"}, "b": {}}, "lastUpdated": "old"}),
    );
    let dir = create_agent_dir(temp.path(), "a", Some(r#"{"author": "x", "v": 1}"#));

    run(temp.path()).unwrap();
    let mut first = read_json(&registry_path);
    let first_metadata = read_json(&dir.join("metadata.json"));

    run(temp.path()).unwrap();
    let mut second = read_json(&registry_path);
    let second_metadata = read_json(&dir.join("metadata.json"));

    assert_eq!(first_metadata, second_metadata);
    let first_stamp = first.as_object_mut().unwrap().remove("lastUpdated").unwrap();
    let second_stamp = second.as_object_mut().unwrap().remove("lastUpdated").unwrap();
    assert!(first_stamp.as_str().unwrap().ends_with('Z'));
    assert!(second_stamp.as_str().unwrap().ends_with('Z'));
    assert_eq!(first, second);
}

fn agent_records() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(
        "[a-z][a-z0-9-]{0,11}",
        prop::option::of("[ -~]{0,16}"),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, author)| {
                let mut record = Map::new();
                record.insert("name".to_string(), Value::String(id.clone()));
                if let Some(author) = author {
                    record.insert("author".to_string(), Value::String(author));
                }
                (id, Value::Object(record))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_agent_is_attributed_and_none_added(agents in agent_records()) {
        let temp = TempDir::new().unwrap();
        let registry_path = write_registry(
            temp.path(),
            &json!({"agents": Value::Object(agents.clone()), "lastUpdated": "old"}),
        );

        let (report, _) = run(temp.path()).unwrap();
        let registry = read_json(&registry_path);
        let rewritten = registry["agents"].as_object().unwrap();

        prop_assert_eq!(report.agents_processed, agents.len());
        prop_assert_eq!(rewritten.len(), agents.len());
        for (id, record) in rewritten {
            prop_assert!(agents.contains_key(id));
            prop_assert_eq!(&record["author"], AUTHOR);
            prop_assert_eq!(&record["name"], &agents[id]["name"]);
        }
    }
}
