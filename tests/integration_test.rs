use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_GRAPH: &str = r#"{"0":[1,2],"1":[2],"2":[]}"#;

fn gt() -> Command {
    Command::cargo_bin("gt").unwrap()
}

fn write_sample_graph(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("graph.json");
    fs::write(&path, SAMPLE_GRAPH).unwrap();
    path
}

#[test]
fn test_traverse_file_graph() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample_graph(&temp_dir);

    gt().args(["traverse", "dfs", "--start", "0", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS Traversal"))
        .stdout(predicate::str::contains("0: 1, 2"))
        .stdout(predicate::str::contains("Traversal Result: 0 -> 2 -> 1"));

    gt().args(["traverse", "bfs", "--start", "0", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Traversal Result: 0 -> 1 -> 2"));
}

#[test]
fn test_traverse_absent_start_is_soft_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample_graph(&temp_dir);

    gt().args(["traverse", "bfs", "--start", "5", "--graph"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Node 5 does not exist in the graph!"));
}

#[test]
fn test_traverse_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_sample_graph(&temp_dir);

    let output = gt()
        .args(["traverse", "dfs", "--json", "--graph"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "dfs");
    assert_eq!(value["start"], 0);
    assert_eq!(value["result"]["status"], "visited");
    assert_eq!(value["result"]["order"], serde_json::json!([0, 2, 1]));
    assert!(value.get("seed").is_none());
}

#[test]
fn test_traverse_invalid_graph_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.json");
    fs::write(&path, r#"{"0":[0]}"#).unwrap();

    gt().args(["traverse", "dfs", "--graph"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_traverse_graph_file_with_repeated_node() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.json");
    fs::write(&path, r#"{"0":[1],"0":[2]}"#).unwrap();

    gt().args(["traverse", "dfs", "--graph"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node 0 is listed more than once"));
}

#[test]
fn test_generate_zero_nodes_fails() {
    gt().args(["generate", "--nodes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node count must be at least 1"));
}

#[test]
fn test_generate_single_node() {
    let output = gt()
        .args(["generate", "--nodes", "1", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 3);
    assert_eq!(value["graph"], serde_json::json!({"0": []}));
}

#[test]
fn test_generate_same_seed_same_output() {
    let first = gt()
        .args(["generate", "--nodes", "9", "--seed", "42"])
        .output()
        .unwrap();
    let second = gt()
        .args(["generate", "--nodes", "9", "--seed", "42"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(
        String::from_utf8(first.stdout)
            .unwrap()
            .contains("Generated 9 nodes")
    );
}

#[test]
fn test_traverse_generated_graph() {
    let output = gt()
        .args(["traverse", "bfs", "--nodes", "6", "--start", "2", "--seed", "10", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 10);
    assert_eq!(value["graph"].as_object().unwrap().len(), 6);
    let order = value["result"]["order"].as_array().unwrap();
    assert_eq!(order[0], 2);
}

#[test]
fn test_traverse_rejects_unknown_kind() {
    gt().args(["traverse", "topo"]).assert().failure();
}
