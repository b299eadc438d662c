// Dweve SegTree - Segment Tree Benchmark Suite
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn segtree_cmd() -> Command {
    Command::cargo_bin("segtree").expect("Failed to find segtree binary")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    segtree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segment tree benchmark"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    segtree_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("segtree"));
}

#[test]
fn test_no_subcommand_fails() {
    segtree_cmd().assert().failure();
}

// ===== Run Command Tests =====

#[test]
fn test_run_small() {
    segtree_cmd()
        .args(["run", "--size", "64", "--operations", "200", "--trials", "2", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BENCHMARK REPORT"))
        .stdout(predicate::str::contains("QUERY MODE:"))
        .stdout(predicate::str::contains("UPDATE MODE:"))
        .stdout(predicate::str::contains("SUMMARY"));
}

#[test]
fn test_run_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("report.json");
    let markdown = dir.path().join("report.md");

    segtree_cmd()
        .args(["run", "-s", "32", "-q", "50", "-k", "1", "-m", "mixed", "--seed", "3"])
        .arg("--json")
        .arg(&json)
        .arg("--markdown")
        .arg(&markdown)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
    assert_eq!(value["results"][0]["mode"], "mixed");
    assert_eq!(value["results"][0]["size"], 32);

    let md = fs::read_to_string(&markdown).unwrap();
    assert!(md.contains("## mixed mode"));
}

#[test]
fn test_run_same_seed_same_checksums() {
    let checksums = || {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("report.json");
        segtree_cmd()
            .args(["run", "-s", "100", "-q", "300", "-k", "1", "--seed", "42"])
            .arg("--json")
            .arg(&json)
            .assert()
            .success();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        value["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["checksum"].as_u64().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(checksums(), checksums());
}

#[test]
fn test_run_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bench.json");
    fs::write(
        &config,
        r#"{ "sizes": [16, 48], "operations": 30, "trials": 1, "modes": ["update"], "seed": 9 }"#,
    )
    .unwrap();
    let json = dir.path().join("report.json");

    segtree_cmd()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    let sizes: Vec<u64> = value["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["size"].as_u64().unwrap())
        .collect();
    assert_eq!(sizes, vec![16, 48]);
}

#[test]
fn test_run_zero_trials_fails() {
    segtree_cmd()
        .args(["run", "--size", "10", "--trials", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("trials"));
}

#[test]
fn test_run_over_capacity_fails() {
    segtree_cmd()
        .args(["run", "--size", "100", "--max-len", "50", "-q", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_run_unknown_timer_rejected() {
    segtree_cmd()
        .args(["run", "--size", "10", "--timer", "sundial"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sundial"));
}

#[test]
fn test_run_missing_config_fails() {
    segtree_cmd()
        .args(["run", "--config", "/nonexistent/bench.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: I/O error for '/nonexistent/bench.json'"));
}

#[test]
fn test_run_malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bench.json");
    fs::write(&config, "{ \"sizes\": [16,").unwrap();

    segtree_cmd()
        .arg("run")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("JSON format error"));
}

#[test]
fn test_run_unwritable_report_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("missing").join("report.json");

    segtree_cmd()
        .args(["run", "-s", "8", "-q", "5", "-k", "1", "--seed", "2"])
        .arg("--json")
        .arg(&json)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error for"));
}

#[test]
fn test_run_overflowing_max_value_fails() {
    segtree_cmd()
        .args(["run", "-s", "4", "-q", "5", "-k", "1", "--max-value", "9223372036854775807"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("max_value"));
}

// ===== Sweep Command Tests =====

#[test]
fn test_sweep_small() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("sweep.json");

    segtree_cmd()
        .args([
            "sweep",
            "--start", "10",
            "--linear-step", "10",
            "--linear-limit", "30",
            "--factor", "2",
            "--max", "100",
            "-q", "20",
            "-k", "1",
            "-m", "query",
            "--seed", "5",
        ])
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    let sizes: Vec<u64> = value["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["size"].as_u64().unwrap())
        .collect();
    assert_eq!(sizes, vec![10, 20, 30, 60]);
}

#[test]
fn test_sweep_bad_factor_fails() {
    segtree_cmd()
        .args(["sweep", "--factor", "1", "--max", "100", "--start", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("factor"));
}

// ===== Verify and Timers Tests =====

#[test]
fn test_verify_succeeds() {
    segtree_cmd()
        .args(["verify", "--size", "1000", "--operations", "1000", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: size 1000"));
}

#[test]
fn test_verify_single_position() {
    segtree_cmd()
        .args(["verify", "--size", "1", "--operations", "50"])
        .assert()
        .success();
}

#[test]
fn test_verify_overflowing_max_value_fails() {
    segtree_cmd()
        .args(["verify", "--size", "4", "--max-value", "9223372036854775807"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("max_value"));
}

#[test]
fn test_verify_empty_domain_fails() {
    segtree_cmd()
        .args(["verify", "--size", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_timers_lists_backends() {
    segtree_cmd()
        .arg("timers")
        .assert()
        .success()
        .stdout(predicate::str::contains("monotonic"))
        .stdout(predicate::str::contains("high-resolution"))
        .stdout(predicate::str::contains("tsc"))
        .stdout(predicate::str::contains("tick"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    segtree_cmd()
        .args(["--verbose", "run", "-s", "8", "-q", "5", "-k", "1", "--seed", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("trial complete"));
}
