use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_lists_flags() {
    Command::cargo_bin("linkqr")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--generate-config"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("linkqr")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("linkqr")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("linkqr.example.toml"));

    let content = std::fs::read_to_string(temp_dir.path().join("linkqr.example.toml")).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("[render]"));
    assert!(content.contains("max_size = 256"));
    assert!(content.contains("[ui]"));
}

#[test]
fn test_invalid_port_is_rejected() {
    Command::cargo_bin("linkqr")
        .unwrap()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
