use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, run_grit_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn status_lists_every_section_sorted(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // branches deliberately created out of order
    run_grit_command(dir.path(), &["branch", "zeta"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["branch", "alpha"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("b.txt"), "b".to_string()));
    write_file(FileSpec::new(dir.path().join("a.txt"), "a".to_string()));
    run_grit_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "=== Branches ===\n\
             alpha\n\
             *main\n\
             zeta\n\
             \n\
             === Staged Files ===\n\
             a.txt\n\
             b.txt\n\
             \n\
             === Removed Files ===\n\
             1.txt\n\
             \n\
             === Modifications Not Staged For Commit ===\n\
             \n\
             === Untracked Files ===\n\n",
        ));
}
