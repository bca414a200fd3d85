use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, run_grit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn add_stages_a_new_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("new.txt"), "fresh".to_string()));

    run_grit_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\nnew.txt"));

    // the pending content is mirrored into the staging store
    let staged_copy = dir.path().join(".grit").join("staging").join("new.txt");
    assert_eq!(std::fs::read_to_string(staged_copy).unwrap(), "fresh");
}

#[rstest]
fn add_a_missing_file_fails(init_repository_dir: TempDir) {
    run_grit_command(init_repository_dir.path(), &["add", "ghost.txt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("File does not exist.\n"));
}

#[rstest]
fn re_adding_an_identically_staged_file_changes_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("new.txt"), "fresh".to_string()));
    run_grit_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();
    let state_before = std::fs::read(dir.path().join(".grit").join("repository")).unwrap();

    run_grit_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    let state_after = std::fs::read(dir.path().join(".grit").join("repository")).unwrap();
    assert_eq!(state_before, state_after);
}

#[rstest]
fn adding_a_file_unchanged_from_head_stages_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // 1.txt is committed with exactly this content already
    run_grit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===",
        ));
}

#[rstest]
fn reverting_a_staged_file_to_head_content_clears_the_stale_entry(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("1.txt"), "edited".to_string()));
    run_grit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n1.txt"));

    // put the committed content back and re-add: the stale pending entry and
    // its on-disk copy must both go away
    write_file(FileSpec::new(dir.path().join("1.txt"), "one".to_string()));
    run_grit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===",
        ));
    assert!(!dir.path().join(".grit").join("staging").join("1.txt").exists());
}

#[rstest]
fn adding_a_file_marked_for_removal_revives_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_grit_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();
    assert!(!dir.path().join("1.txt").exists());

    write_file(FileSpec::new(dir.path().join("1.txt"), "one".to_string()));
    run_grit_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    // content equals head again, so nothing is pending in either direction
    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));
}
