//! CLI integration tests
//!
//! Each test builds a parent/{tool, project...} layout in a temp directory
//! and runs the binary from the tool directory, the way the utility runs in
//! production next to the folders it backs up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// parent/{tool, projectA/{readme.md, sub/data.txt}}
fn create_layout() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let tool = temp_dir.path().join("tool");
    fs::create_dir(&tool).unwrap();

    let project = temp_dir.path().join("projectA");
    fs::create_dir_all(project.join("sub")).unwrap();
    fs::write(project.join("readme.md"), "hello").unwrap();
    fs::write(project.join("sub").join("data.txt"), "world").unwrap();

    (temp_dir, tool)
}

fn dirsnap(tool: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dirsnap").unwrap();
    cmd.current_dir(tool).env_remove("DIRSNAP_BASE_DIR");
    cmd
}

#[test]
fn backup_creates_destination_and_reports_count() {
    let (temp, tool) = create_layout();

    dirsnap(&tool)
        .args(["backup", "--label", "nightly run", "projectA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projectA_nightly-run"))
        .stdout(predicate::str::contains("3 files/folders"));

    let dest = temp.path().join("tool").join("projectA_nightly-run");
    assert!(dest.join("readme.md").exists());
    assert!(dest.join("sub").join("data.txt").exists());
}

#[test]
fn backup_collision_is_reported() {
    let (temp, tool) = create_layout();
    fs::create_dir(temp.path().join("tool").join("projectA_v1")).unwrap();

    dirsnap(&tool)
        .args(["backup", "--label", "v1", "projectA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn backup_of_missing_folder_is_an_error_line() {
    let (_temp, tool) = create_layout();

    dirsnap(&tool)
        .args(["backup", "--label", "v1", "no-such-project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not a valid directory"));
}

#[test]
fn list_shows_backups_and_total() {
    let (temp, tool) = create_layout();
    fs::create_dir(temp.path().join("tool").join("projectA_v1")).unwrap();

    dirsnap(&tool)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("projectA"))
        .stdout(predicate::str::contains("v1"))
        .stdout(predicate::str::contains("Total: 1 backup(s)"));
}

#[test]
fn list_json_is_machine_readable() {
    let (temp, tool) = create_layout();
    fs::create_dir(temp.path().join("tool").join("projectA_v1")).unwrap();

    let output = dirsnap(&tool).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "projectA_v1");
}

#[test]
fn delete_without_force_previews_only() {
    let (temp, tool) = create_layout();
    let backup = temp.path().join("tool").join("projectA_v1");
    fs::create_dir(&backup).unwrap();

    dirsnap(&tool)
        .args(["delete", "projectA_v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    assert!(backup.exists());
}

#[test]
fn delete_with_force_removes_backup() {
    let (temp, tool) = create_layout();
    let backup = temp.path().join("tool").join("projectA_v1");
    fs::create_dir_all(backup.join("sub")).unwrap();
    fs::write(backup.join("sub").join("x.txt"), "x").unwrap();

    dirsnap(&tool)
        .args(["delete", "projectA_v1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    assert!(!backup.exists());
}

#[test]
fn siblings_lists_sources() {
    let (_temp, tool) = create_layout();

    dirsnap(&tool)
        .arg("siblings")
        .assert()
        .success()
        .stdout(predicate::str::contains("projectA"));
}

#[test]
fn check_update_reports_all_three_states() {
    let (_temp, tool) = create_layout();

    // Installed version is v1.2.1 (the crate version)
    dirsnap(&tool)
        .args(["check-update", "--latest", "v9.9.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New version v9.9.9 available!"));

    dirsnap(&tool)
        .args(["check-update", "--latest", "v1.2.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.2.1"));

    dirsnap(&tool)
        .args(["check-update", "--latest", "v0.1.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BETA-v1.2.1 INSTALLED"));
}

#[test]
fn base_dir_env_override_is_honored() {
    let (temp, _tool) = create_layout();
    let tool = temp.path().join("tool");
    fs::create_dir(tool.join("projectA_v1")).unwrap();

    Command::cargo_bin("dirsnap")
        .unwrap()
        .env("DIRSNAP_BASE_DIR", &tool)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("projectA"));
}
