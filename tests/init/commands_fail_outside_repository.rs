use crate::common::command::{repository_dir, run_crookie_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::add(&["add", "1.txt"])]
#[case::commit(&["commit", "message"])]
#[case::log(&["log"])]
#[case::show(&["show", "0123456789abcdef0123456789abcdef01234567"])]
fn command_before_init_is_rejected(repository_dir: TempDir, #[case] args: &[&str]) {
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));

    run_crookie_command(repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a crookie repository"));

    assert!(!repository_dir.path().join(".crookie").exists());
}

#[rstest]
fn missing_directory_is_reported_not_created(repository_dir: TempDir) {
    run_crookie_command(repository_dir.path(), &["-C", "typo", "log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a crookie repository"));

    assert!(!repository_dir.path().join("typo").exists());
}

#[rstest]
fn init_creates_the_directory_given_with_c(repository_dir: TempDir) {
    run_crookie_command(repository_dir.path(), &["-C", "fresh", "init"])
        .assert()
        .success();

    assert!(repository_dir.path().join("fresh").join(".crookie").is_dir());
}
