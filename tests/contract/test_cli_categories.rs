// Contract tests for `dirgen categories` and `dirgen stacks`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use dirgen::cli::categories::CategoryInfo;
use dirgen::cli::stacks::CodeInfo;

fn dirgen() -> Command {
    Command::cargo_bin("dirgen").unwrap()
}

fn empty_catalog(temp: &TempDir) -> String {
    let path = temp.path().join("catalog.toml");
    fs::write(&path, "").unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_categories_lists_the_builtins() {
    let mut cmd = dirgen();
    cmd.arg("categories");

    let mut assert = cmd.assert().success();
    for category in ["tech", "food", "animals", "pop", "silly", "dev"] {
        assert = assert.stdout(predicate::str::contains(category));
    }
}

#[test]
fn test_categories_json_shape() {
    let temp = TempDir::new().unwrap();
    let catalog = empty_catalog(&temp);

    let output = dirgen()
        .args(["categories", "--config", catalog.as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let infos: Vec<CategoryInfo> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(infos.len(), 6);
    for info in &infos {
        assert!(info.words > 0, "category '{}' lists no words", info.name);
        assert!(!info.description.is_empty());
    }
}

#[test]
fn test_categories_includes_custom_entries() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.toml");
    fs::write(&path, "[categories]\nocean = [\"tide\", \"reef\"]\n").unwrap();

    let mut cmd = dirgen();
    cmd.args(["categories", "--config", path.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ocean"));
}

#[test]
fn test_stacks_lists_codes_with_descriptions() {
    let mut cmd = dirgen();
    cmd.arg("stacks");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bepy - Backend Python"))
        .stdout(predicate::str::contains("dogo - DevOps Go"));
}

#[test]
fn test_stacks_json_carries_all_builtin_stacks() {
    let temp = TempDir::new().unwrap();
    let catalog = empty_catalog(&temp);

    let output = dirgen()
        .args(["stacks", "--config", catalog.as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let infos: Vec<CodeInfo> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(infos.len(), 28);
}

#[test]
fn test_stacks_filters_frameworks_for_one_stack() {
    let mut cmd = dirgen();
    cmd.args(["stacks", "--stack", "bepy"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dja - Django"))
        .stdout(predicate::str::contains("flk - Flask"));
}

#[test]
fn test_stacks_rejects_unknown_stack() {
    let mut cmd = dirgen();
    cmd.args(["stacks", "--stack", "nope"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown tech stack 'nope'"));
}

#[test]
fn test_missing_explicit_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");

    let mut cmd = dirgen();
    cmd.args(["categories", "--config", missing.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("catalog file not found"));
}
