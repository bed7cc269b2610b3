//! CLI end-to-end tests that invoke the compiled `bump-version` binary
//! against temporary project trees.

use assert_cmd::Command;
use bump_test_utils::TestProject;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn bump_version() -> Command {
    let mut cmd = Command::cargo_bin("bump-version").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_bump_updates_every_file() {
    let project = TestProject::new();

    bump_version()
        .arg("0.2.0")
        .current_dir(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Bumping version to 0.2.0..."))
        .stdout(predicate::str::contains("  Updated: package.json\n"))
        .stdout(predicate::str::contains("  Updated: app/src-tauri/tauri.conf.json\n"))
        .stdout(predicate::str::contains("  Updated: daemon/uti-daemon.spec\n"))
        .stdout(predicate::str::contains("All 6 files updated to version 0.2.0"));

    assert!(project.read("app/src-tauri/Cargo.toml").contains("version = \"0.2.0\""));
    assert!(project.read("daemon/uti-daemon.spec").contains("Version:        0.2.0\n"));
}

#[test]
fn test_confirmation_lines_follow_table_order() {
    let project = TestProject::new();

    let output = bump_version()
        .arg("0.2.0")
        .current_dir(project.root())
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let updated: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("  Updated: "))
        .collect();
    assert_eq!(updated, TestProject::TARGETS.to_vec());
}

#[test]
fn test_runs_from_subdirectory() {
    let project = TestProject::new();

    bump_version()
        .arg("1.0.0")
        .current_dir(project.path("app/src-tauri"))
        .assert()
        .success();

    assert!(project.read("package.json").contains("\"version\": \"1.0.0\""));
}

#[test]
fn test_second_run_changes_nothing() {
    let project = TestProject::new();

    bump_version().arg("0.2.0").current_dir(project.root()).assert().success();
    let first = project.snapshot();
    bump_version().arg("0.2.0").current_dir(project.root()).assert().success();

    assert_eq!(project.snapshot(), first);
}

#[test]
fn test_missing_argument_prints_usage() {
    let project = TestProject::new();

    bump_version()
        .current_dir(project.root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: bump-version <version>"))
        .stdout(predicate::str::contains("Example: bump-version 0.2.0"));
}

#[test]
fn test_two_arguments_prints_usage() {
    let project = TestProject::new();
    let before = project.snapshot();

    bump_version()
        .args(["0.2.0", "0.3.0"])
        .current_dir(project.root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: bump-version <version>"));

    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_invalid_versions_touch_nothing() {
    let project = TestProject::new();
    let before = project.snapshot();

    for bad in ["1.2", "v1.2.3", "1.2.3-rc.1", "1.2.3.4"] {
        bump_version()
            .arg(bad)
            .current_dir(project.root())
            .assert()
            .code(1)
            .stdout(predicate::str::contains(format!(
                "Error: Invalid version format '{bad}'"
            )))
            .stdout(predicate::str::contains("Expected format: X.Y.Z (e.g., 0.2.0)"));
    }

    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_outside_project_fails_with_root_not_found() {
    let dir = TestProject::empty();

    bump_version()
        .arg("0.2.0")
        .current_dir(dir.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find project root"));
}

#[test]
fn test_missing_target_file_is_reported() {
    let project = TestProject::new();
    project.remove("app/package.json");
    let root_json = project.read("package.json");

    bump_version()
        .arg("0.2.0")
        .current_dir(project.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("package.json"));

    assert_eq!(project.read("package.json"), root_json);
}

#[test]
fn test_missing_version_line_fails_loudly() {
    let project = TestProject::new();
    project.write("daemon/Cargo.toml", "[package]\nname = \"uti-daemon\"\nversion.workspace = true\n");

    bump_version()
        .arg("0.2.0")
        .current_dir(project.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to update daemon/Cargo.toml"))
        .stderr(predicate::str::contains("No line matching"));
}

#[test]
fn test_dry_run_prints_diff_and_writes_nothing() {
    let project = TestProject::new();
    let before = project.snapshot();

    bump_version()
        .args(["0.2.0", "--dry-run"])
        .current_dir(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("--- a/daemon/Cargo.toml"))
        .stdout(predicate::str::contains("+version = \"0.2.0\""))
        .stdout(predicate::str::contains("Dry run: 6 of 6 files would change"));

    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_json_report() {
    let project = TestProject::new();

    let output = bump_version()
        .args(["0.2.0", "--json"])
        .current_dir(project.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["version"], "0.2.0");
    assert_eq!(report["dry_run"], false);
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 6);
    assert_eq!(files[5]["path"], "daemon/uti-daemon.spec");
    assert_eq!(files[5]["format"], "spec_file");
    assert_eq!(files[5]["previous"], "0.1.0");
    assert_eq!(files[5]["changed"], true);
}

#[test]
fn test_help_exits_zero() {
    bump_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_downgrade_warns_on_stderr() {
    let project = TestProject::new();

    bump_version()
        .arg("0.0.9")
        .current_dir(project.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("version moves backwards"));
}

#[test]
fn test_hyphenated_version_is_invalid_format() {
    let project = TestProject::new();
    let before = project.snapshot();

    for bad in ["-1.2.3", "--foo"] {
        bump_version()
            .arg(bad)
            .current_dir(project.root())
            .assert()
            .code(1)
            .stdout(predicate::str::contains(format!(
                "Error: Invalid version format '{bad}'"
            )))
            .stdout(predicate::str::contains("Expected format: X.Y.Z (e.g., 0.2.0)"));
    }

    assert_eq!(project.snapshot(), before);
}

#[test]
fn test_unknown_flag_prints_usage() {
    let project = TestProject::new();
    let before = project.snapshot();

    bump_version()
        .args(["0.2.0", "--frobnicate"])
        .current_dir(project.root())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: bump-version <version>"))
        .stdout(predicate::str::contains("Example: bump-version 0.2.0"));

    assert_eq!(project.snapshot(), before);
}
