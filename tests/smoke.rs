//! Installation smoke checks: the binary starts, reports a version and
//! advertises its commands.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn version_is_reported() {
    let output = cargo_bin_cmd!("silicon")
        .arg("version")
        .output()
        .expect("run silicon version");
    assert!(output.status.success());

    let version = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let version = version.trim();
    assert!(!version.is_empty(), "version output empty");
    assert!(version.starts_with('v'), "version should start with 'v'");
}

#[test]
fn help_advertises_commands() {
    cargo_bin_cmd!("silicon")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hello")
                .and(predicate::str::contains("goodbye"))
                .and(predicate::str::contains("version")),
        )
        .stderr(predicate::str::is_empty());
}
