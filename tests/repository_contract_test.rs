// tests/repository_contract_test.rs
//
// The same lookups run against the in-memory repository and a real one, so
// workflow tests built on the mock see what git would answer.
mod common;

use common::TempRepo;
use git_changelog::git::{Git2Repository, MockRepository, Repository};

fn assert_no_tags<R: Repository>(repo: &R) {
    assert_eq!(repo.latest_tag(Some("main-v*")).unwrap(), None);
    assert_eq!(repo.latest_tag(None).unwrap(), None);
}

fn assert_other_branch_tags_ignored<R: Repository>(repo: &R) {
    assert_eq!(repo.latest_tag(Some("main-v*")).unwrap(), None);
    assert_eq!(
        repo.latest_tag(Some("develop-v*")).unwrap(),
        Some("develop-v0.4.0".to_string())
    );
}

fn assert_unreachable_tag_ignored<R: Repository>(repo: &R, expected: Option<&str>) {
    assert_eq!(
        repo.latest_tag(Some("main-v*")).unwrap().as_deref(),
        expected
    );
}

fn assert_range_ends_at_branch<R: Repository>(repo: &R, commits: usize) {
    assert_eq!(repo.log_range(None, "main").unwrap().len(), commits);
    assert!(repo.log_range(None, "develop").is_err());
}

#[test]
fn test_no_tags() {
    let mut mock = MockRepository::new();
    mock.add_commit("1111111000", "feat: first");
    mock.add_commit("2222222000", "fix: second");
    assert_no_tags(&mock);
    assert_range_ends_at_branch(&mock, 2);

    let fixture = TempRepo::new();
    fixture.commit("feat: first");
    fixture.commit("fix: second");
    let git = Git2Repository::open(fixture.path()).unwrap();
    assert_no_tags(&git);
    assert_range_ends_at_branch(&git, 2);
}

#[test]
fn test_tags_of_other_branches_only() {
    let mut mock = MockRepository::new();
    mock.add_commit("1111111000", "feat: first");
    mock.add_tag("develop-v0.4.0", "1111111000");
    mock.add_commit("2222222000", "fix: second");
    assert_other_branch_tags_ignored(&mock);

    let fixture = TempRepo::new();
    fixture.commit("feat: first");
    fixture.tag("develop-v0.4.0");
    fixture.commit("fix: second");
    let git = Git2Repository::open(fixture.path()).unwrap();
    assert_other_branch_tags_ignored(&git);
}

#[test]
fn test_unreachable_tag_only() {
    let mut mock = MockRepository::new();
    mock.add_commit("1111111000", "feat: first");
    mock.add_tag("main-v2.0.0", "9999999000");
    assert_unreachable_tag_ignored(&mock, None);

    let fixture = TempRepo::new();
    fixture.commit("feat: first");
    fixture.tag_unreachable("main-v2.0.0");
    let git = Git2Repository::open(fixture.path()).unwrap();
    assert_unreachable_tag_ignored(&git, None);
}

#[test]
fn test_unreachable_tag_beside_reachable_one() {
    let mut mock = MockRepository::new();
    mock.add_commit("1111111000", "feat: first");
    mock.add_tag("main-v1.0.0", "1111111000");
    mock.add_tag("main-v2.0.0", "9999999000");
    mock.add_commit("2222222000", "fix: second");
    assert_unreachable_tag_ignored(&mock, Some("main-v1.0.0"));

    let fixture = TempRepo::new();
    fixture.commit("feat: first");
    fixture.tag("main-v1.0.0");
    fixture.tag_unreachable("main-v2.0.0");
    fixture.commit("fix: second");
    let git = Git2Repository::open(fixture.path()).unwrap();
    assert_unreachable_tag_ignored(&git, Some("main-v1.0.0"));
}
