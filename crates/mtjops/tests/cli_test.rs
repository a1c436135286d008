//! Integration tests for the `mtjops` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mtjops` binary with env isolation.
///
/// Clears all `MTJOPS_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn mtjops_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mtjops");
    cmd.env("HOME", "/tmp/mtjops-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/mtjops-cli-test-nonexistent")
        .env_remove("MTJOPS_PROFILE")
        .env_remove("MTJOPS_SERVER")
        .env_remove("MTJOPS_TOKEN")
        .env_remove("MTJOPS_OUTPUT")
        .env_remove("MTJOPS_INSECURE")
        .env_remove("MTJOPS_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = mtjops_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    mtjops_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("MTJ Foundation")
            .and(predicate::str::contains("events"))
            .and(predicate::str::contains("passes"))
            .and(predicate::str::contains("gate")),
    );
}

#[test]
fn test_version_flag() {
    mtjops_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mtjops"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    mtjops_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    mtjops_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    mtjops_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = mtjops_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_events_list_no_backend() {
    mtjops_cmd()
        .args(["events", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    mtjops_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_show_json_masks_plaintext_token() {
    // A config file with a plaintext token must never leak it through
    // the structured output formats.
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("mtjops");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "default_profile = \"default\"\n\n\
         [profiles.default]\n\
         server = \"https://ops.example.org\"\n\
         token = \"super-secret-token\"\n",
    )
    .unwrap();

    for format in ["json", "yaml"] {
        let output = mtjops_cmd()
            .env("XDG_CONFIG_HOME", dir.path())
            .args(["config", "show", "--output", format])
            .output()
            .unwrap();
        assert!(output.status.success());
        let text = combined_output(&output);
        assert!(
            !text.contains("super-secret-token"),
            "token leaked in {format} output:\n{text}"
        );
        assert!(
            text.contains("****"),
            "expected masked token in {format} output:\n{text}"
        );
    }
}

#[test]
fn test_config_path_prints_a_path() {
    mtjops_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_output_format() {
    let output = mtjops_cmd()
        .args(["--output", "invalid", "events", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing backend config, not about argument parsing.
    mtjops_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "events",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_server_flag_without_token_asks_for_credentials() {
    mtjops_cmd()
        .args(["--server", "https://ops.example.org", "events", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token").or(predicate::str::contains("set-token")));
}

#[test]
fn test_config_init_rejects_invalid_url() {
    mtjops_cmd()
        .args(["config", "init", "--server", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_events_subcommands_exist() {
    mtjops_cmd()
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("stats")),
        );
}

#[test]
fn test_passes_subcommands_exist() {
    mtjops_cmd()
        .args(["passes", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("generate")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("revoke")),
        );
}

#[test]
fn test_gate_subcommands_exist() {
    mtjops_cmd()
        .args(["gate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scan").and(predicate::str::contains("run")));
}

#[test]
fn test_gate_run_has_rehearse_flag() {
    mtjops_cmd()
        .args(["gate", "run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--rehearse"));
}

#[test]
fn test_boxes_add_requires_full_location() {
    // Region, city, and route are all mandatory for placement.
    let output = mtjops_cmd()
        .args(["boxes", "add", "--number", "B-100", "--holder", "Ali"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage error");
    let text = combined_output(&output);
    assert!(
        text.contains("--region") || text.contains("required"),
        "Expected missing-argument error:\n{text}"
    );
}

#[test]
fn test_config_subcommands_exist() {
    mtjops_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("set-token")),
        );
}
