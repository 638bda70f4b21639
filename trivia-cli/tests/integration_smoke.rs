//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Questions per page"))
        .stdout(predicate::str::contains("--in-memory"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Insert the default categories"));
}

#[test]
fn test_serve_rejects_zero_page_size() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.arg("serve").arg("--in-memory").arg("--page-size").arg("0");

    cmd.assert().failure().stderr(predicate::str::contains("page-size"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.env_remove("DATABASE_URL")
        .current_dir(std::env::temp_dir())
        .arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_in_memory_rejects_database_only_flags() {
    for flag in ["--seed", "--skip-migrations"] {
        let mut cmd = Command::cargo_bin("trivia").unwrap();
        cmd.arg("serve").arg("--in-memory").arg(flag);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }
}
