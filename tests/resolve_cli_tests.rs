//! CLI integration tests for the resolve command

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

#[allow(deprecated)]
fn unfurl_cmd() -> Command {
    Command::cargo_bin("unfurl").unwrap()
}

#[test]
fn test_resolve_registered_package() {
    unfurl_cmd()
        .args(["resolve", "lucide-react"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://esm.sh/lucide-react@0.469.0?external=react",
        ));
}

#[test]
fn test_resolve_scoped_subpath() {
    unfurl_cmd()
        .args(["resolve", "@radix-ui/react-dialog/foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://esm.sh/@radix-ui/react-dialog@1.1.4/foo?external=react,react-dom",
        ));
}

#[test]
fn test_resolve_unknown_package_falls_back() {
    unfurl_cmd()
        .args(["resolve", "left-pad"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://esm.sh/left-pad?external=react,react-dom",
        ));
}

#[test]
fn test_resolve_node_builtin_fails() {
    unfurl_cmd()
        .args(["resolve", "fs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no browser equivalent"));
}

#[test]
fn test_resolve_relative_specifier_fails() {
    unfurl_cmd()
        .args(["resolve", "./local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("relative imports"));
}

#[test]
fn test_resolve_with_custom_registry() {
    let project = TestProject::new();
    project.write_file(
        "pins.yaml",
        "packages:\n  - specifier: my-lib\n    package: my-lib\n    version: \"2.0.0\"\n",
    );

    unfurl_cmd()
        .args([
            "resolve",
            "my-lib",
            "--registry",
            project.join("pins.yaml").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://esm.sh/my-lib@2.0.0"));
}

#[test]
fn test_help_output() {
    unfurl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recover"))
        .stdout(predicate::str::contains("imports"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("completions"));
}
