//! Integration tests for the envsync binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REQUIREMENTS: &str = "# pinned\nenvsync-test-absent-pkg==1.0.0\n";

const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "dependencies": {
    "envsync-test-absent-module": "^1.2.3"
  }
}"#;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.13.2</version>
    </dependency>
  </dependencies>
</project>"#;

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), REQUIREMENTS).unwrap();
    fs::write(temp.path().join("package.json"), PACKAGE_JSON).unwrap();
    fs::write(temp.path().join("pom.xml"), POM).unwrap();
    temp
}

fn envsync(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.current_dir(project).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Compare installed toolchains"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("watch"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn scan_json_reports_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = envsync(temp.path())
        .args(["scan", "--json", "--no-write"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    let keys: Vec<_> = report.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["os", "python", "java", "node", "conflicts"]);
    assert_eq!(
        report["conflicts"]["python"],
        serde_json::json!(["envsync-test-absent-pkg missing (required 1.0.0)"])
    );
    assert_eq!(
        report["conflicts"]["node"],
        serde_json::json!(["envsync-test-absent-module missing (required ^1.2.3)"])
    );
    assert_eq!(
        report["conflicts"]["java"],
        serde_json::json!(["junit requires 4.13.2 (manual check)"])
    );
    assert!(!temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn default_command_writes_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    envsync(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment"))
        .stdout(predicate::str::contains("junit requires 4.13.2 (manual check)"))
        .stdout(predicate::str::contains("Report written to"));

    let content = fs::read_to_string(temp.path().join("envsync_report.json"))?;
    assert!(content.starts_with("{\n    \"os\": {"));
    Ok(())
}

#[test]
fn scan_output_flag_sets_report_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let out = temp.path().join("reports").join("env.json");

    envsync(temp.path())
        .arg("scan")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
    Ok(())
}

#[test]
fn check_fails_on_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    envsync(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Java:"))
        .stdout(predicate::str::contains("junit requires 4.13.2 (manual check)"));

    assert!(!temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn findings_are_printed_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    envsync(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("⚠ junit requires 4.13.2 (manual check)"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn check_passes_without_manifests() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    envsync(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflicts detected"));
    Ok(())
}

#[test]
fn check_json_prints_conflicts_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let output = envsync(temp.path()).args(["check", "--json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let conflicts: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let keys: Vec<_> = conflicts.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["python", "node", "java"]);
    Ok(())
}

#[test]
fn project_flag_selects_directory() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project();
    let elsewhere = TempDir::new()?;

    envsync(elsewhere.path())
        .arg("check")
        .arg("--project")
        .arg(project.path())
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn malformed_manifest_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("package.json"), "{ \"dependencies\": ")?;

    envsync(temp.path())
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"))
        .stderr(predicate::str::contains("package.json"));

    assert!(!temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[test]
fn config_changes_manifest_location() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".envsync"))?;
    fs::create_dir_all(temp.path().join("deps"))?;
    fs::write(
        temp.path().join(".envsync/config.yml"),
        "manifests:\n  pom: deps/pom.xml\n",
    )?;
    fs::write(temp.path().join("deps/pom.xml"), POM)?;

    envsync(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("junit requires 4.13.2"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".envsync"))?;
    fs::write(temp.path().join(".envsync/config.yml"), "dashboard:\n  port: 8080\n")?;

    envsync(temp.path())
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    envsync(temp.path())
        .args(["scan", "--config", "nope.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn watch_with_count_terminates() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    envsync(temp.path())
        .args(["watch", "--interval", "0", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan #1"))
        .stdout(predicate::str::contains("Scan #2"));

    assert!(temp.path().join("envsync_report.json").exists());
    Ok(())
}

#[cfg(unix)]
fn write_tool(dir: &Path, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", script)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn tools_on_caller_path_are_found() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project();
    let bin = TempDir::new()?;
    write_tool(bin.path(), "node", "echo v99.0.0");
    write_tool(
        bin.path(),
        "npm",
        r#"if [ "$1" = "-v" ]; then echo 10.9.9; else echo "└── envsync-test-absent-module@1.2.3"; fi"#,
    );
    let path = format!("{}:{}", bin.path().display(), std::env::var("PATH")?);

    // A non-shell $SHELL must not hide the tools either.
    let output = envsync(temp.path())
        .env("PATH", path)
        .env("SHELL", "/usr/sbin/nologin")
        .args(["scan", "--json", "--no-write"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["node"]["version"], "v99.0.0");
    assert_eq!(report["node"]["npm_version"], "10.9.9");
    assert_eq!(report["conflicts"]["node"], serde_json::json!([]));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envsync"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envsync"));
    Ok(())
}
