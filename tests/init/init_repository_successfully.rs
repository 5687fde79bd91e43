use crate::common::command::{repository_dir, run_crookie_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_crookie_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty crookie repository in .+\.crookie\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let metadata = repository_dir.path().join(".crookie");
    assert!(metadata.join("objects").is_dir());
    assert_eq!(std::fs::read_to_string(metadata.join("HEAD"))?, "");
    assert_eq!(std::fs::read_to_string(metadata.join("index"))?, "[]");

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_crookie_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nested/project/.crookie"));

    assert!(
        repository_dir
            .path()
            .join("nested")
            .join("project")
            .join(".crookie")
            .join("objects")
            .is_dir()
    );

    Ok(())
}
