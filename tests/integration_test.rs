// tests/integration_test.rs
use std::process::Command;
use tempfile::TempDir;

fn publish_npm(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_publish-npm"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("CIRCLE_TAG")
        .env_remove("NPM_CONFIG_OTP");
    cmd
}

#[test]
fn test_publish_npm_help() {
    let dir = TempDir::new().unwrap();
    let output = publish_npm(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("publish-npm"));
    assert!(stdout.contains("dry-run"));
    assert!(stdout.contains("nightly"));
    assert!(stdout.contains("release"));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = publish_npm(&dir)
        .arg("prealpha")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_release_with_invalid_tag_fails_before_publishing() {
    let dir = TempDir::new().unwrap();
    let output = publish_npm(&dir)
        .arg("release")
        .env("CIRCLE_TAG", "1.0.1")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("Version 1.0.1 is not valid for Release"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_release_without_tag_fails() {
    let dir = TempDir::new().unwrap();
    let output = publish_npm(&dir)
        .arg("release")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("CIRCLE_TAG"));
}

#[test]
fn test_dry_run_outside_git_fails() {
    let dir = TempDir::new().unwrap();
    let output = publish_npm(&dir)
        .arg("dry-run")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Not in a git checkout"));
}
