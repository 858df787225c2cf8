//! Integration tests for the netspan CLI
//!
//! These tests run the netspan binary end to end: generating fixture
//! graphs, querying routes, and rendering PNGs.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Get a Command for netspan
fn netspan() -> Command {
    cargo_bin_cmd!("netspan")
}

/// Generate a decagon graph file and return its path
fn decagon(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("decagon.json");
    netspan()
        .args(["generate", "--nodes", "10"])
        .args(["--out", path.to_str().unwrap()])
        .assert()
        .success();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    netspan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: netspan"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_version_flag() {
    netspan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netspan"));
}

// ============================================================================
// Generate
// ============================================================================

#[test]
fn test_generate_emits_json_graph() {
    let output = netspan()
        .args(["generate", "--nodes", "6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(doc["edges"].as_array().unwrap().len(), 6);
    assert_eq!(doc["nodes"][0]["id"], "0");
}

#[test]
fn test_generate_spikes_triple_the_nodes() {
    let output = netspan()
        .args(["generate", "--nodes", "4", "--spikes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 12);
    let ids: Vec<&str> = doc["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"2a"));
    assert!(ids.contains(&"2b"));
}

#[test]
fn test_generate_to_file_reports_counts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ring.json");

    netspan()
        .args(["generate", "--nodes", "5"])
        .args(["--out", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 nodes, 5 edges"));

    assert!(path.exists());
}

#[test]
fn test_generate_rejects_malformed_drop_edge() {
    netspan()
        .args(["generate", "--nodes", "5", "--drop-edge", "04"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--drop-edge"));
}

// ============================================================================
// Path
// ============================================================================

#[test]
fn test_path_short_way_round() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["path", graph.to_str().unwrap(), "0", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 -> 3 -> 4"))
        .stdout(predicate::str::contains("distance:"))
        .stdout(predicate::str::contains("hops: 4"));
}

#[test]
fn test_path_other_way_round() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["path", graph.to_str().unwrap(), "0", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 9 -> 8 -> 7 -> 6"));
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    let output = netspan()
        .args(["--format", "json"])
        .args(["path", graph.to_str().unwrap(), "0", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["status"], "found");
    assert_eq!(result["route"].as_array().unwrap().len(), 5);
    assert!(result["distance"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_path_engines_agree_on_cost() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    let mut distances = Vec::new();
    for algo in ["iterative", "frontier"] {
        let output = netspan()
            .args(["--format", "json"])
            .args(["path", graph.to_str().unwrap(), "0", "4", "--algo", algo])
            .output()
            .unwrap();
        assert!(output.status.success(), "algo {algo} failed");
        let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        distances.push(result["distance"].as_f64().unwrap());
    }
    assert!((distances[0] - distances[1]).abs() < 1e-9);
}

#[test]
fn test_path_same_node_is_zero_hops() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["path", graph.to_str().unwrap(), "7", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7"))
        .stdout(predicate::str::contains("hops: 0"));
}

#[test]
fn test_path_quiet_prints_route_only() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["--quiet", "path", graph.to_str().unwrap(), "0", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 -> 3 -> 4"))
        .stdout(predicate::str::contains("distance:").not());
}

#[test]
fn test_path_through_cut_pentagon() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cut.json");

    netspan()
        .args(["generate", "--nodes", "5"])
        .args(["--drop-edge", "0:4", "--drop-edge", "2:3"])
        .args(["--out", path.to_str().unwrap()])
        .assert()
        .success();

    netspan()
        .args(["path", path.to_str().unwrap(), "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2"));
}

#[test]
fn test_path_disconnected_is_a_data_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cut.json");

    netspan()
        .args(["generate", "--nodes", "5"])
        .args(["--drop-edge", "0:4", "--drop-edge", "2:3"])
        .args(["--out", path.to_str().unwrap()])
        .assert()
        .success();

    netspan()
        .args(["path", path.to_str().unwrap(), "0", "3"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no route from 0 to 3"));
}

#[test]
fn test_path_unknown_node() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["path", graph.to_str().unwrap(), "0", "ghost"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("node not found: ghost"));
}

#[test]
fn test_invalid_graph_file_names_offending_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"{
            "nodes": [{"id": "a", "x": 0.0, "y": 0.0}],
            "edges": [{"a": "a", "b": "ghost"}, {"a": "phantom", "b": "a"}]
        }"#,
    )
    .unwrap();

    netspan()
        .args(["path", path.to_str().unwrap(), "a", "a"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown node id(s)"))
        .stderr(predicate::str::contains("ghost"))
        .stderr(predicate::str::contains("phantom"));
}

#[test]
fn test_missing_graph_file_json_error_envelope() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = netspan()
        .args(["--format", "json"])
        .args(["path", missing.to_str().unwrap(), "0", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "graph_not_found");
}

// ============================================================================
// Render
// ============================================================================

fn png_dimensions(data: &[u8]) -> (u32, u32) {
    // IHDR is always the first chunk: width/height at fixed offsets
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
    let width = u32::from_be_bytes(data[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(data[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn test_render_writes_png() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());
    let out = dir.path().join("ring.png");

    netspan()
        .args(["render", graph.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("800x800"));

    let data = fs::read(&out).unwrap();
    assert_eq!(png_dimensions(&data), (800, 800));
}

#[test]
fn test_render_with_route() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());
    let out = dir.path().join("route.png");

    netspan()
        .args(["render", graph.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .args(["--from", "0", "--to", "4"])
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn test_render_route_requires_both_endpoints() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());
    let out = dir.path().join("route.png");

    netspan()
        .args(["render", graph.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .args(["--from", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_render_honors_config_canvas() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());
    let out = dir.path().join("small.png");
    let config = dir.path().join("netspan.toml");
    fs::write(&config, "[render]\nwidth = 200\nheight = 150\n").unwrap();

    netspan()
        .args(["--config", config.to_str().unwrap()])
        .args(["render", graph.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    let data = fs::read(&out).unwrap();
    assert_eq!(png_dimensions(&data), (200, 150));
}

#[test]
fn test_render_json_output() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());
    let out = dir.path().join("ring.png");

    let output = netspan()
        .args(["--format", "json"])
        .args(["render", graph.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .args(["--from", "0", "--to", "6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["width"], 800);
    assert_eq!(report["route"].as_array().unwrap().len(), 5);
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_format() {
    netspan()
        .args(["--format", "xml", "generate"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_unknown_algorithm() {
    let dir = tempdir().unwrap();
    let graph = decagon(dir.path());

    netspan()
        .args(["path", graph.to_str().unwrap(), "0", "4"])
        .args(["--algo", "bogus"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}
