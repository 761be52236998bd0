// wscensor/tests/cli_integration_tests.rs
//! Runs the `wscensor` binary end to end.
//!
//! Every test passes `--no-config` or an explicit `--config` so a developer's own
//! `.wscensor.yaml` never leaks into the results.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

const FIXTURE: &str = include_str!("../../wscensor-core/tests/fixtures/workspace.json");

fn wscensor() -> Command {
    let mut cmd = Command::cargo_bin("wscensor").unwrap();
    cmd.env_remove("WSCENSOR_CONFIG");
    cmd.env("RUST_LOG", "debug");
    cmd
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("output should be JSON")
}

fn mismatched_workspace() -> String {
    let doc = json!({
        "main": {
            "id": "m", "type": "split",
            "children": [{
                "id": "t", "type": "tabs",
                "children": [
                    {"id": "a", "type": "leaf", "state": {"type": "markdown", "state": {"file": "A.md"}}},
                    {"id": "b", "type": "leaf", "state": {"type": "markdown", "state": {"file": "B.md"}}}
                ],
                "currentTab": 1
            }]
        },
        "left": {"id": "l", "type": "split", "children": []},
        "right": {"id": "r", "type": "split", "children": []},
        "active": "a",
        "lastOpenFiles": []
    });
    serde_json::to_string_pretty(&doc).unwrap()
}

#[test]
fn censor_from_stdin_with_command_line_rules() {
    let assert = wscensor()
        .args(["--no-config", "--pattern", "Some company/", "--word", "secret", "censor"])
        .write_stdin(FIXTURE)
        .assert()
        .success();

    let out = parse(&assert.get_output().stdout);
    let main_tabs = &out["main"]["children"][0];
    assert_eq!(main_tabs["children"].as_array().map(Vec::len), Some(2));
    assert_eq!(main_tabs["currentTab"], json!(1));
    assert_eq!(out["active"], json!("d27a5c0e8f3b4916"));
    assert_eq!(out["left"]["children"][0]["children"][1]["state"]["state"]["query"], json!(""));
    assert_eq!(
        out["lastOpenFiles"],
        json!(["Home/ideas.md", "Home/todo.md", "Another company/notes.md", "zzSome company/x.md"])
    );
    assert!(out.get("left-ribbon").is_some());
}

#[test]
fn output_has_no_trailing_newline() {
    let assert = wscensor()
        .args(["--no-config", "-P", "Some company/", "censor"])
        .write_stdin(FIXTURE)
        .assert()
        .success();
    let stdout = &assert.get_output().stdout;
    assert_eq!(stdout.last(), Some(&b'}'));
}

#[test]
fn filter_alias_runs_censor() {
    wscensor()
        .args(["--no-config", "-P", "Some company/", "filter"])
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Some company/plan.md").not());
}

#[test]
fn censor_file_to_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("workspace.json");
    let output = dir.path().join("censored.json");
    fs::write(&input, FIXTURE)?;

    wscensor()
        .args(["--no-config", "-P", "Another company/", "censor", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Censored workspace written to"));

    let out: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
    assert_eq!(out["main"]["children"][1]["children"], json!([]));
    assert_eq!(out["main"]["children"][1]["id"], json!("71e9c4a2b6d0f853"));
    Ok(())
}

#[test]
fn empty_primary_split_is_regenerated() {
    let assert = wscensor()
        .args(["--no-config", "--id-bytes", "4", "-P", "Home/", "-P", "Some company/", "censor"])
        .write_stdin(FIXTURE)
        .assert()
        .success();

    let out = parse(&assert.get_output().stdout);
    let split = &out["main"]["children"][0];
    assert_ne!(split["id"], json!("0b4a1f92c3d8e7a6"));
    assert_eq!(split["id"].as_str().map(str::len), Some(8));
    assert_eq!(split["children"][0]["state"]["type"], json!("empty"));
    assert_eq!(out["active"], split["children"][0]["id"]);
}

#[test]
fn selection_mismatch_fails_without_writing() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("out.json");

    wscensor()
        .args(["--no-config", "-P", "B.md", "censor", "-o"])
        .arg(&output)
        .write_stdin(mismatched_workspace())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    assert!(!output.exists());
    Ok(())
}

#[test]
fn malformed_json_fails() {
    wscensor()
        .args(["--no-config", "censor"])
        .write_stdin("{\"main\": ")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_supplies_rules() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "file_patterns:\n  - \"Some company/\"\nbanned_words:\n  - secret")?;

    let assert = wscensor()
        .arg("--config")
        .arg(config.path())
        .arg("censor")
        .write_stdin(FIXTURE)
        .assert()
        .success();

    let out = parse(&assert.get_output().stdout);
    assert_eq!(out["left"]["children"][0]["children"][1]["state"]["state"]["query"], json!(""));
    assert_eq!(out["main"]["children"][0]["children"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn config_path_from_environment() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "banned_words:\n  - secret")?;

    wscensor()
        .env("WSCENSOR_CONFIG", config.path())
        .arg("censor")
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("secret project").not());
    Ok(())
}

#[test]
fn invalid_pattern_is_rejected() {
    wscensor()
        .args(["--no-config", "--pattern", "(unclosed", "censor"])
        .write_stdin(FIXTURE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("(unclosed"));
}

#[test]
fn summary_and_diff_go_to_stderr() {
    let assert = wscensor()
        .args(["--no-config", "-P", "Some company/", "censor", "--summary", "--diff"])
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stderr(predicate::str::contains("Recently opened entries dropped: 2"))
        .stderr(predicate::str::contains("-                \"file\": \"Some company/plan.md\","));

    parse(&assert.get_output().stdout);
}

#[test]
fn roundtrip_of_pretty_document_is_identical() {
    wscensor()
        .args(["--no-config", "roundtrip"])
        .write_stdin(FIXTURE.trim_end())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("byte-identical"));
}

#[test]
fn roundtrip_reports_trailing_newline() {
    wscensor()
        .args(["--no-config", "roundtrip", "--diff"])
        .write_stdin(format!("{}\n", FIXTURE.trim_end()))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("changed the file's bytes"));
}

#[test]
fn roundtrip_of_minified_document_differs() {
    let doc: Value = serde_json::from_str(FIXTURE).unwrap();
    let minified = serde_json::to_string(&doc).unwrap();

    wscensor()
        .args(["--no-config", "roundtrip"])
        .write_stdin(minified)
        .assert()
        .code(2);
}

#[test]
fn print_renders_filter_repo_callback() {
    wscensor()
        .args(["--no-config", "-P", "Some company/", "-w", "secret", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target = \".obsidian/workspace.json\".encode()"))
        .stdout(predicate::str::contains("\"--pattern=Some company/\""))
        .stdout(predicate::str::contains("\"--word=secret\""))
        .stdout(predicate::str::contains("\"censor\""));
}

#[test]
fn print_honors_target_and_binary() {
    wscensor()
        .args(["--no-config", "print", "--target", "vault/.obsidian/workspace.json", "--binary", "/opt/bin/wscensor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vault/.obsidian/workspace.json\""))
        .stdout(predicate::str::contains("[\"/opt/bin/wscensor\""));
}

#[test]
fn no_config_conflicts_with_config() {
    wscensor()
        .args(["--no-config", "--config", "x.yaml", "censor"])
        .assert()
        .failure();
}
