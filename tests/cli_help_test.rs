//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy-and-own UI component installer"))
        .stdout(predicate::str::contains("--registry-url"))
        .stdout(predicate::str::contains("--registry-dir"));
}

#[test]
fn test_add_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESOLUTION"))
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OUTPUT FORMATS"));
}

#[test]
fn test_info_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-f yaml"));
}

#[test]
fn test_search_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search components"));
}

#[test]
fn test_init_help() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create kit.json"));
}

#[test]
fn test_add_requires_names() {
    Command::cargo_bin("kitctl")
        .unwrap()
        .arg("add")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
