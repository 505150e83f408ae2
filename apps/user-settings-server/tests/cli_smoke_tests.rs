#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the user-settings-server binary

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::time::Duration;

use tempfile::NamedTempFile;
use tokio::time::timeout;

fn server() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_user-settings-server"));
    cmd.env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

fn run_server(args: &[&str]) -> Output {
    server()
        .args(args)
        .output()
        .expect("Failed to execute user-settings-server")
}

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Returns `Err("elapsed")` when the process is still running at the deadline.
async fn run_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_user-settings-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn()?;
    match timeout(timeout_duration, child.wait_with_output()).await {
        Ok(result) => result.map_err(Into::into),
        Err(_elapsed) => Err("elapsed".into()),
    }
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"]);
    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("user-settings-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report an error: {stderr}");
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_invalid_yaml() {
    let file = yaml_file("server: [unclosed\n  bind_addr: 1\n");
    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);
    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration"), "stderr: {stderr}");
}

#[test]
fn test_cli_check_accepts_valid_config() {
    let file = yaml_file(
        "server:\n  bind_addr: \"127.0.0.1:0\"\n\
         user_settings:\n  default_currency: USD\n",
    );
    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
}

#[test]
fn test_cli_check_rejects_default_outside_catalog() {
    let file = yaml_file("user_settings:\n  default_currency: ZZZ\n");
    let output = run_server(&["--config", file.path().to_str().unwrap(), "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ZZZ"), "stderr: {stderr}");
}

#[test]
fn test_cli_print_config_shows_defaults() {
    let output = run_server(&["--print-config"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("config is JSON");
    assert_eq!(json["user_settings"]["default_currency"], "INR");
    assert_eq!(
        json["user_settings"]["default_timezone"],
        "Asia/Kolkata (GMT+05:30)"
    );
}

#[test]
fn test_cli_env_overrides_config() {
    let output = server()
        .env("APP__USER_SETTINGS__DEFAULT_CURRENCY", "EUR")
        .args(["--port", "9123", "--print-config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["user_settings"]["default_currency"], "EUR");
    assert_eq!(json["server"]["bind_addr"], "127.0.0.1:9123");
}

#[test]
fn test_cli_run_rejects_bad_bind_address() {
    let output = server()
        .env("APP__SERVER__BIND_ADDR", "not-an-address")
        .args(["--mock", "run"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid bind address"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_cli_mock_server_keeps_running() {
    let result =
        run_server_with_timeout(&["--mock", "--port", "0", "run"], Duration::from_secs(3)).await;

    match result {
        Err(e) => assert_eq!(e.to_string(), "elapsed", "unexpected error: {e}"),
        Ok(output) => panic!(
            "server exited early: {}",
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}
