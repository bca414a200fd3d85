use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::command::{grit_add_commit, init_repository_dir, run_grit_command};

#[rstest]
fn log_prints_the_history_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    grit_add_commit(dir.path(), "a.txt", "X", "Second snapshot");

    let output = run_grit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commit "))
        .stdout(predicate::str::contains("Date: "))
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    // one block per commit down to the root, newest first
    assert_eq!(output.matches("===\n").count(), 3);
    let second = output.find("Second snapshot").unwrap();
    let first = output.find("First snapshot").unwrap();
    let initial = output.find("initial commit").unwrap();
    assert!(second < first && first < initial);

    // the deterministic root commit renders the epoch in the fixed zone
    assert!(output.contains("Date: Wed Dec 31 16:00:00 1969 -0800"));
}

#[rstest]
fn log_follows_first_parent_links_only(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // put one commit on a side branch, then come back
    run_grit_command(dir.path(), &["branch", "side"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    grit_add_commit(dir.path(), "side.txt", "s", "Side only");
    run_grit_command(dir.path(), &["checkout", "main"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Side only").not());
}

#[rstest]
fn global_log_lists_every_commit_in_the_store(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_grit_command(dir.path(), &["branch", "side"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    grit_add_commit(dir.path(), "side.txt", "s", "Side only");
    run_grit_command(dir.path(), &["checkout", "main"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initial commit"))
        .stdout(predicate::str::contains("First snapshot"))
        .stdout(predicate::str::contains("Side only"));
}

#[rstest]
fn find_prints_the_ids_of_matching_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    grit_add_commit(dir.path(), "a.txt", "X", "Tagged message");
    grit_add_commit(dir.path(), "a.txt", "Y", "Tagged message");

    let output = run_grit_command(dir.path(), &["find", "Tagged message"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    let ids = output.lines().collect::<Vec<_>>();
    assert_eq!(ids.len(), 2);
    for id in ids {
        assert_eq!(id.len(), 40);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[rstest]
fn find_requires_an_exact_message_match(init_repository_dir: TempDir) {
    run_grit_command(init_repository_dir.path(), &["find", "First snap"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Found no commit with that message.\n"));
}
