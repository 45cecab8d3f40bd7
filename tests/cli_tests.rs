//! Integration tests for the wayfind CLI
//!
//! These tests run the wayfind binary and verify output, formats, and
//! exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for wayfind
fn wayfind() -> Command {
    cargo_bin_cmd!("wayfind")
}

/// Flags building the five-node sample graph
const SAMPLE_EDGES: [&str; 12] = [
    "--edge", "a:b", "--edge", "b:c", "--edge", "c:d", "--edge", "d:e", "--edge", "c:a", "--edge",
    "e:a",
];

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    wayfind()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wayfind"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("nodes"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    wayfind()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wayfind"));
}

#[test]
fn test_subcommand_help() {
    wayfind()
        .args(["path", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Find a path between two nodes"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    wayfind()
        .args(["--format", "records", "nodes"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_strategy_exit_code_2() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "a", "--to", "b", "--strategy", "dijkstra"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn test_malformed_edge_exit_code_2() {
    wayfind()
        .args(["nodes", "--edge", "ab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge spec"));
}

#[test]
fn test_unknown_source_exit_code_3() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "zz", "--to", "a"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node"));
}

#[test]
fn test_unknown_node_json_error_envelope() {
    let mut cmd = wayfind();
    cmd.args(["--format", "json", "links", "--of", "zz"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .code(3)
        .stderr(predicate::str::contains("unknown_node"));
}

// ============================================================================
// Path queries
// ============================================================================

#[test]
fn test_path_bfs_human() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "b", "--to", "a", "--strategy", "bfs"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("b -> c -> a"))
        .stdout(predicate::str::contains("2 hop(s) via bfs"));
}

#[test]
fn test_path_dfs_human() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "b", "--to", "a", "--strategy", "dfs"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("b -> c -> d -> e -> a"));
}

#[test]
fn test_path_defaults_to_bfs() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "b", "--to", "a"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 hop(s) via bfs"));
}

#[test]
fn test_path_json() {
    let mut cmd = wayfind();
    cmd.args(["--format", "json", "path", "--from", "b", "--to", "a"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"))
        .stdout(predicate::str::contains("\"strategy\": \"bfs\""))
        .stdout(predicate::str::contains("\"path_length\": 2"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let mut cmd = wayfind();
    cmd.args(["path", "--from", "b", "--to", "island", "--node", "island"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no path from b to island"));
}

#[test]
fn test_path_quiet_prints_only_the_walk() {
    let mut cmd = wayfind();
    cmd.args(["--quiet", "path", "--from", "b", "--to", "a"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("b -> c -> a"))
        .stdout(predicate::str::contains("hop(s)").not());
}

// ============================================================================
// Node and link listing
// ============================================================================

#[test]
fn test_nodes_sorted() {
    let mut cmd = wayfind();
    cmd.arg("nodes");
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("a\nb\nc\nd\ne\n"));
}

#[test]
fn test_nodes_counts_isolated_nodes() {
    wayfind()
        .args(["--format", "json", "nodes", "--node", "x", "--node", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"));
}

#[test]
fn test_links_human() {
    let mut cmd = wayfind();
    cmd.args(["links", "--of", "c"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::diff("c -> a\nc -> d\n"));
}

#[test]
fn test_links_json() {
    let mut cmd = wayfind();
    cmd.args(["--format", "json", "links", "--of", "c"]);
    cmd.args(SAMPLE_EDGES);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"));
}

// ============================================================================
// Demo walkthrough
// ============================================================================

#[test]
fn test_demo_bfs() {
    wayfind()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: node_set -> a, b, c, d, e"))
        .stdout(predicate::str::contains("ok: linked_nodes(c) -> a, d"))
        .stdout(predicate::str::contains(
            "ok: get_path(b, a, bfs) -> b -> c -> a",
        ));
}

#[test]
fn test_demo_dfs() {
    wayfind()
        .args(["demo", "--strategy", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok: get_path(b, a, dfs) -> b -> c -> d -> e -> a",
        ));
}

#[test]
fn test_demo_json() {
    wayfind()
        .args(["--format", "json", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));
}
