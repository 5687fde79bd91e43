use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const DEFAULT_COMMIT_DATE: &str = "2023-01-01T12:00:00Z";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_crookie_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository with one root commit containing `1.txt` ("one") and `a/2.txt` ("two")
#[fixture]
pub fn committed_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let file1 = FileSpec::new(init_repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        init_repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    run_crookie_command(init_repository_dir.path(), &["add", "1.txt", "a/2.txt"])
        .assert()
        .success();

    crookie_commit(init_repository_dir.path(), "Initial commit")
        .assert()
        .success();

    init_repository_dir
}

pub fn run_crookie_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("crookie").expect("Failed to find crookie binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("CROOKIE_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn crookie_commit(dir: &Path, message: &str) -> Command {
    crookie_commit_with_timestamp(dir, message, DEFAULT_COMMIT_DATE)
}

pub fn crookie_commit_with_timestamp(dir: &Path, message: &str, timestamp: &str) -> Command {
    let mut cmd = run_crookie_command(dir, &["commit", message]);
    cmd.env("CROOKIE_COMMIT_DATE", timestamp);
    cmd
}

/// Stage `content` under `file_name` and commit it
pub fn commit_file(dir: &Path, file_name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));

    run_crookie_command(dir, &["add", file_name])
        .assert()
        .success();
    crookie_commit(dir, message).assert().success();
}

pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".crookie").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    Ok(head_content.trim().to_string())
}

/// Parent of a commit, read straight from the stored commit record
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let commit = read_stored_commit(dir, commit_id)?;

    Ok(commit["parent"]
        .as_str()
        .filter(|parent| !parent.is_empty())
        .map(str::to_string))
}

pub fn read_stored_commit(
    dir: &Path,
    commit_id: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read(object_path(dir, commit_id))?;

    Ok(serde_json::from_slice(&content)?)
}

pub fn read_index(dir: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".crookie").join("index"))?;

    Ok(serde_json::from_str(&content)?)
}

pub fn object_path(dir: &Path, object_id: &str) -> std::path::PathBuf {
    dir.join(".crookie")
        .join("objects")
        .join(&object_id[..2])
        .join(&object_id[2..])
}
