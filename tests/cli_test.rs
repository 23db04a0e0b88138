//! Integration tests for the git-changelog binary

mod common;

use assert_cmd::cargo;
use common::TempRepo;
use predicates::prelude::*;
use tempfile::TempDir;

fn git_changelog() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("git-changelog"))
}

#[test]
fn test_version() {
    git_changelog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-changelog"));
}

#[test]
fn test_help() {
    git_changelog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prepend its changelog entry"));
}

#[test]
fn test_missing_branch_exits_1() {
    let temp = TempDir::new().unwrap();
    git_changelog()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("請指定分支名稱"));
}

#[test]
fn test_missing_increment_exits_1() {
    let temp = TempDir::new().unwrap();
    git_changelog()
        .current_dir(temp.path())
        .arg("main")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("請指定要遞增的版本號部分"));
}

#[test]
fn test_invalid_increment_exits_1() {
    let temp = TempDir::new().unwrap();
    git_changelog()
        .current_dir(temp.path())
        .args(["main", "huge"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("無效的命令"));
}

#[test]
fn test_no_remote_exits_1_without_changelog() {
    let fixture = TempRepo::new();
    fixture.commit("feat: first");

    git_changelog()
        .current_dir(fixture.path())
        .args(["main", "patch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("取得 Git URL 失敗"));

    assert!(fixture.read("CHANGELOG.md").is_none());
    assert_eq!(fixture.head_message(), "feat: first");
}

#[test]
fn test_release_success() {
    let fixture = TempRepo::new();
    fixture.commit("feat(cli): add flag");
    fixture.set_origin("https://github.com/acme/widget.git");

    git_changelog()
        .current_dir(fixture.path())
        .args(["main", "Patch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("main-v1.0.1"))
        .stdout(predicate::str::contains("已更新"));

    let changelog = fixture.read("CHANGELOG.md").unwrap();
    assert!(changelog.starts_with("## [main-v1.0.1]"));
    assert!(changelog.contains("### cli\n- feat\n"));
    assert!(fixture.is_annotated_tag("main-v1.0.1"));
}

#[test]
fn test_dry_run_changes_nothing() {
    let fixture = TempRepo::new();
    fixture.commit("fix: typo");
    fixture.set_origin("https://github.com/acme/widget");

    git_changelog()
        .arg("--dry-run")
        .arg("-C")
        .arg(fixture.path())
        .args(["main", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## [main-v1.1.0]"))
        .stdout(predicate::str::contains("  - typo(["));

    assert!(fixture.read("CHANGELOG.md").is_none());
    assert!(!fixture.is_annotated_tag("main-v1.1.0"));
}

#[test]
fn test_custom_config_path() {
    let fixture = TempRepo::new();
    fixture.commit("chore: bump deps");
    fixture.set_origin("https://github.com/acme/widget");

    git_changelog()
        .current_dir(fixture.path())
        .arg("--dry-run")
        .arg("--config")
        .arg(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/custom_config.toml"))
        .args(["main", "patch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### chore"))
        .stdout(predicate::str::contains("bump deps"));
}
