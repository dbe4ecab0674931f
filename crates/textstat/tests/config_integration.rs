//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".textstat.toml");
    fs::write(&config_path, r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".textstat.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("textstat.toml");
    fs::write(&config_path, r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("textstat.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // Both configs exist; the regular file (higher precedence) should win
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("textstat.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_toml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textstat.yaml"), "log_level: warn\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_yml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textstat.yml"), "log_level: debug\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textstat.json"),
        r#"{"log_level": "error"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    // Parent config (error) vs child config (debug): child should win
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".textstat.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();

    // Both dotfiles exist. YAML comes after TOML in merge order, so it wins
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join(".textstat.yaml"), "log_level: error\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["log_level"], "error",
        "later extension (YAML) should override earlier (TOML) in merge"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();

    // Project config sets debug
    fs::write(tmp.path().join(".textstat.toml"), r#"log_level = "debug""#).unwrap();

    // Explicit config sets error
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["config"]["log_level"], "error",
        "--config should override discovered config"
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textstat.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration").or(predicate::str::contains("config")));
}

#[test]
fn invalid_yaml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textstat.yaml"),
        "invalid:\n  yaml\n content:\n[broken",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".textstat.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    // Figment ignores unknown fields by default with serde
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".textstat.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    // Structure: /tmp/parent/.project.toml + /tmp/parent/repo/.git/ + /tmp/parent/repo/src/
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // Config in parent (outside repo)
    fs::write(parent.join(".textstat.toml"), r#"log_level = "error""#).unwrap();

    // .git directory marks repo boundary
    fs::create_dir(repo.join(".git")).unwrap();

    // Running from src/ should NOT find parent config (stopped at .git)
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default, boundary stops search"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "should not find config beyond boundary"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // .git and config in same directory
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".textstat.toml"), r#"log_level = "debug""#).unwrap();

    // Running from src/ should find the repo config
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "config next to .git should be found"
    );
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should report config file"
    );
}

// =============================================================================
// Scoring Settings
// =============================================================================

const TEXT: &str = "Extraordinary complications. The cat sat.";

#[test]
fn language_from_config_is_reported_and_used() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textstat.toml"), "language = \"xx\"\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["language"], "xx");

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "syllable_count"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language: xx"));
}

#[test]
fn language_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textstat.toml"), "language = \"xx\"\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "syllable_count", "-l", "en_us"])
        .assert()
        .success();
}

#[test]
fn language_from_environment() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .env("TEXTSTAT_LANGUAGE", "en_gb")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["language"], "en_gb");
}

#[test]
fn dictionary_path_from_config_is_applied() {
    let tmp = TempDir::new().unwrap();
    let words = tmp.path().join("words");
    fs::create_dir(&words).unwrap();
    fs::write(words.join("en_us.txt"), "extraordinary\ncomplications\n").unwrap();
    fs::write(tmp.path().join("textstat.toml"), "dictionary_path = \"words\"\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "difficult_words"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn dictionary_path_without_list_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();
    fs::write(tmp.path().join("textstat.toml"), "dictionary_path = \"empty\"\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "difficult_words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("easy-word dictionary for en_us not found"));
}

#[test]
fn max_input_bytes_limits_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textstat.toml"), "max_input_bytes = 10\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "char_count"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disable_input_limit_allows_large_input() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("textstat.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap()])
        .args(["score", "input.txt", "--metric", "char_count"])
        .assert()
        .success()
        .stdout(predicate::str::diff("37\n"));
}

#[test]
fn max_grade_from_config_gates_grade() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("textstat.toml"), "max_grade = -100\n").unwrap();
    fs::write(tmp.path().join("input.txt"), TEXT).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "grade", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: -100"));

    // the flag wins over the config
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "grade", "input.txt"])
        .args(["--max-grade", "100"])
        .assert()
        .success();
}

// =============================================================================
// Log Files
// =============================================================================

#[test]
fn log_dir_from_environment_receives_json_lines() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");

    cmd()
        .env("TEXTSTAT_LOG_DIR", &logs)
        .env_remove("RUST_LOG")
        .args(["-C", tmp.path().to_str().unwrap(), "-v", "info"])
        .assert()
        .success();

    let log = fs::read_to_string(logs.join("textstat.jsonl")).unwrap();
    assert!(log.lines().any(|line| line.contains("executing info command")));
    for line in log.lines() {
        serde_json::from_str::<Value>(line).expect("log line should be JSON");
    }
}
