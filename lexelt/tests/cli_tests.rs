//! CLI Interface Tests
//!
//! These tests run the lexelt binary against rule files and sources on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the lexelt binary
fn lexelt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lexelt"))
}

fn lexelt() -> Command {
    let mut cmd = Command::new(lexelt_bin());
    cmd.env_remove("LEXELT_RULES")
        .env_remove("LEXELT_VERBOSE")
        .env("LEXELT_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    lexelt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("tokens")));
}

#[test]
fn test_cli_version() {
    lexelt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexelt"));
}

#[test]
fn test_cli_tokens_listing() {
    let expected = "\
0:0\t20\tdef
0:4\t1\tgreet
0:9\t10\t(
0:10\t1\tname
0:14\t11\t)
1:0\t1\tx
1:2\t12\t=
1:4\t3\t1_000
1:9\t13\t,
1:11\t4\t2.5e3
1:16\t13\t,
1:18\t2\t\\\"hi\\\"
2:0\tEND\t
";

    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("sample.src"))
        .arg("--rules")
        .arg(fixtures_dir().join("rules.toml"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_rules_from_env() {
    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("sample.src"))
        .env("LEXELT_RULES", fixtures_dir().join("rules.toml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0:0\t20\tdef\n"));
}

#[test]
fn test_cli_error_tokens_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("bad.src");
    fs::write(&source, "x = 0x\n").expect("Failed to write source");

    lexelt()
        .arg("tokens")
        .arg(&source)
        .arg("--rules")
        .arg(fixtures_dir().join("rules.toml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("0:4\tERROR_INVALID_INTEGER\t0x\n"))
        .stdout(predicate::str::ends_with("1:0\tEND\t\n"))
        .stderr(predicate::str::contains("1 lexical error(s)"));
}

#[test]
fn test_cli_allow_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("bad.src");
    fs::write(&source, "greet(\"unclosed\n").expect("Failed to write source");

    lexelt()
        .arg("tokens")
        .arg(&source)
        .arg("--rules")
        .arg(fixtures_dir().join("rules.toml"))
        .arg("--allow-errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR_UNCLOSED_STRING"))
        .stderr(predicate::str::contains("unclosed string literal"));
}

#[test]
fn test_cli_missing_rule_file() {
    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("sample.src"))
        .arg("--rules")
        .arg(fixtures_dir().join("does_not_exist.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read rule file"));
}

#[test]
fn test_cli_missing_source_file() {
    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("does_not_exist.src"))
        .arg("--rules")
        .arg(fixtures_dir().join("rules.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read source"));
}

#[test]
fn test_cli_invalid_rules() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let rules = temp_dir.path().join("rules.toml");
    fs::write(&rules, "[integers]\ntoken_type = 3\ndefault_base = 40\n")
        .expect("Failed to write rules");

    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("sample.src"))
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "integers.default_base: base 40 outside 2..=36",
        ));
}

#[test]
fn test_cli_unknown_rule_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let rules = temp_dir.path().join("rules.toml");
    fs::write(&rules, "no_such_rule = true\n").expect("Failed to write rules");

    lexelt()
        .arg("tokens")
        .arg(fixtures_dir().join("sample.src"))
        .arg("--rules")
        .arg(&rules)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse rules"));
}
