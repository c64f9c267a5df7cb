use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_lists_options() {
    let output = Command::cargo_bin("ghmails")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--api-url"));
    assert!(stdout.contains("--timeout"));
}

#[test]
fn version_prints_package_version() {
    let output = Command::cargo_bin("ghmails")
        .unwrap()
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("ghmails")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
