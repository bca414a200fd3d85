use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use grit::areas::repository::Repository;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with two committed files: `1.txt` = "one", `2.txt` = "two".
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("2.txt"),
        "two".to_string(),
    ));

    run_grit_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    run_grit_command(repository_dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    run_grit_command(repository_dir.path(), &["commit", "First snapshot"])
        .assert()
        .success();

    repository_dir
}

pub fn run_grit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("grit").expect("Failed to find grit binary");
    cmd.env("NO_PAGER", "1");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Write `content` to `file` and commit it with `message`.
pub fn grit_add_commit(dir: &Path, file: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(file), content.to_string()));
    run_grit_command(dir, &["add", file]).assert().success();
    run_grit_command(dir, &["commit", message])
        .assert()
        .success();
}

/// Open the repository through the library for state inspection.
pub fn load_repository(dir: &Path) -> Repository {
    Repository::load(&dir.to_string_lossy(), Box::new(std::io::sink()))
        .expect("repository should load")
}

pub fn head_commit_id(dir: &Path) -> String {
    load_repository(dir).state().head().to_string()
}
