#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

#[test]
fn run_loads_default_dotenv_file() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(
        &dir.path().join(".env"),
        "ENVRUN_CLI_DEFAULT=from_default\n",
    );

    let output = run_envrun(dir.path(), &["run", "--", "printenv", "ENVRUN_CLI_DEFAULT"], None);

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "from_default");
}

#[test]
fn run_uses_last_file_precedence_for_selected_files() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(&dir.path().join(".env.base"), "ENVRUN_CLI_PRECEDENCE=base\n");
    write_file(
        &dir.path().join(".env.local"),
        "ENVRUN_CLI_PRECEDENCE=local\n",
    );

    let output = run_envrun(
        dir.path(),
        &[
            "run",
            "-f",
            ".env.base,.env.local",
            "--",
            "printenv",
            "ENVRUN_CLI_PRECEDENCE",
        ],
        None,
    );

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "local");
}

#[test]
fn run_file_values_override_inherited_environment() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(&dir.path().join(".env"), "ENVRUN_CLI_OVERRIDE=from_file\n");

    let output = run_envrun(
        dir.path(),
        &["run", "--", "printenv", "ENVRUN_CLI_OVERRIDE"],
        Some(("ENVRUN_CLI_OVERRIDE", "from_env")),
    );

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "from_file");
}

#[test]
fn run_inherits_unrelated_environment() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(&dir.path().join(".env"), "ENVRUN_CLI_FILE_ONLY=1\n");

    let output = run_envrun(
        dir.path(),
        &["run", "--", "printenv", "ENVRUN_CLI_INHERITED"],
        Some(("ENVRUN_CLI_INHERITED", "from_parent")),
    );

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "from_parent");
}

#[test]
fn run_ignore_missing_skips_missing_selected_files() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(&dir.path().join(".env.real"), "ENVRUN_CLI_IGNORE=loaded\n");

    let output = run_envrun(
        dir.path(),
        &[
            "run",
            "--ignore-missing",
            "-f",
            "missing.env,.env.real",
            "--",
            "printenv",
            "ENVRUN_CLI_IGNORE",
        ],
        None,
    );

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "loaded");
}

#[test]
fn run_without_ignore_missing_fails_when_selected_file_is_missing() {
    let dir = TempDir::new().expect("failed to create temp dir");

    let output = run_envrun(
        dir.path(),
        &[
            "run",
            "-f",
            "missing.env",
            "--",
            "printenv",
            "ENVRUN_CLI_REQUIRED",
        ],
        None,
    );

    assert!(
        !output.status.success(),
        "expected missing file to fail: stdout={:?}, stderr={:?}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn run_skips_malformed_lines_and_still_executes() {
    let dir = TempDir::new().expect("failed to create temp dir");
    write_file(
        &dir.path().join(".env"),
        "ENVRUN_CLI_GOOD=kept\nNOT A DECLARATION\n",
    );

    let output = run_envrun(dir.path(), &["run", "--", "printenv", "ENVRUN_CLI_GOOD"], None);

    assert_success(&output);
    assert_eq!(stdout_trimmed(&output), "kept");
}

fn run_envrun(dir: &Path, args: &[&str], env_pair: Option<(&str, &str)>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_envrun"));
    command.current_dir(dir).args(args);
    if let Some((key, value)) = env_pair {
        command.env(key, value);
    }
    command.output().expect("failed to run envrun binary")
}

fn stdout_trimmed(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .trim_end()
        .to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success: stdout={:?}, stderr={:?}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write_file(path: &Path, content: &str) {
    std::fs::write(path, content).expect("failed to write fixture file");
}
