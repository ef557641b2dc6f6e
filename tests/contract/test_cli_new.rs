// Contract tests for `dirgen new`

use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use tempfile::TempDir;

use dirgen::cli::new::NewResponse;
use dirgen::models::words::builtin_words;

fn dirgen() -> Command {
    Command::cargo_bin("dirgen").unwrap()
}

#[test]
fn test_new_generates_four_part_name() {
    let output = dirgen()
        .args([
            "new", "-t", "bepy", "-f", "dja", "-c", "food", "-s", "mixed", "-l", "4", "--seed",
            "42", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: NewResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response.stack, "bepy");
    assert_eq!(response.framework, "dja");
    assert!(!response.created);

    let shape = Regex::new(r"^bepy-dja-[a-z]+-[a-z0-9]{4}$").unwrap();
    assert!(
        shape.is_match(&response.name),
        "unexpected name shape: '{}'",
        response.name
    );

    let word = response.name.split('-').nth(2).unwrap();
    assert!(builtin_words("food").contains(&word));
}

#[test]
fn test_new_text_output_leads_with_the_codes() {
    let mut cmd = dirgen();
    cmd.args(["new", "-t", "bens", "-f", "exp", "--seed", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generated folder name: bens-exp-"));
}

#[test]
fn test_new_is_reproducible_with_a_seed() {
    let run = || {
        dirgen()
            .args(["new", "-t", "fsts", "-f", "nxt", "--seed", "1234"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_new_rejects_unknown_stack() {
    let mut cmd = dirgen();
    cmd.args(["new", "-t", "nope", "-f", "dja"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown tech stack 'nope'"));
}

#[test]
fn test_new_rejects_incompatible_framework() {
    let mut cmd = dirgen();
    cmd.args(["new", "-t", "bepy", "-f", "rct"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not compatible"));
}

#[test]
fn test_new_create_materializes_the_directory() {
    let temp = TempDir::new().unwrap();

    let output = dirgen()
        .current_dir(temp.path())
        .args([
            "new", "-t", "dogo", "-f", "gor", "--seed", "77", "--create", "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: NewResponse = serde_json::from_slice(&output.stdout).unwrap();
    assert!(response.created);
    assert!(
        temp.path().join(&response.name).is_dir(),
        "missing directory '{}'",
        response.name
    );
}
