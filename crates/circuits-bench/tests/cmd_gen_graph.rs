//! Integration tests for the `gen-graph` binary.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `gen-graph` binary.
fn gen_graph_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("gen-graph");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(gen_graph_bin())
        .args(args)
        .output()
        .expect("run gen-graph")
}

#[test]
fn writes_one_line_per_arc() {
    let out = run(&["s", "7"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 48);
    for line in lines {
        let fields: Vec<usize> = line
            .split(' ')
            .map(|field| field.parse().expect("vertex number"))
            .collect();
        assert_eq!(fields.len(), 2, "line: {line}");
        assert!(fields.iter().all(|&v| v < 16), "line: {line}");
    }
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("16 vertices, 48 arcs"), "stderr: {stderr}");
}

#[test]
fn default_seed_is_stable() {
    assert_eq!(run(&["s"]).stdout, run(&["s", "42"]).stdout);
}

#[test]
fn help_exits_0() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("[SEED]"), "stdout: {stdout}");
}

#[test]
fn malformed_seed_is_a_usage_error() {
    let out = run(&["m", "abc"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'abc'"), "stderr: {stderr}");
    assert!(stderr.contains("SEED"), "stderr: {stderr}");
}

#[test]
fn unknown_tier_is_a_usage_error() {
    let out = run(&["huge"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
