use crate::common::command::{
    committed_repository_dir, get_head_commit_sha, read_index, run_crookie_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_existing_repository_reports_and_keeps_state(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head_before = get_head_commit_sha(committed_repository_dir.path())?;

    run_crookie_command(committed_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "repository already initialized in",
        ));

    assert_eq!(get_head_commit_sha(committed_repository_dir.path())?, head_before);
    assert_eq!(read_index(committed_repository_dir.path())?, serde_json::json!([]));

    Ok(())
}
