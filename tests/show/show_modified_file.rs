use crate::common::command::{
    commit_file, committed_repository_dir, get_head_commit_sha, init_repository_dir,
    run_crookie_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Per-file sections of `show` output, without the commit header
fn file_sections(stdout: &str) -> Vec<String> {
    stdout
        .split("\nFile: ")
        .skip(1)
        .map(|section| format!("File: {}", section))
        .collect()
}

#[rstest]
fn modified_file_shows_line_diff_against_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "f.txt", "a\nb\nc", "First");
    commit_file(dir, "f.txt", "a\nx\nc", "Second");

    let head = get_head_commit_sha(dir)?;
    let output = run_crookie_command(dir, &["show", &head])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        file_sections(&stdout),
        vec!["File: f.txt\na\nx\nc\nDiff:\n a\n-b\n+x\n c\n".to_string()]
    );

    Ok(())
}

#[rstest]
fn file_absent_from_parent_is_a_new_file(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    commit_file(dir, "new.txt", "fresh", "Add new file");

    let head = get_head_commit_sha(dir)?;
    let output = run_crookie_command(dir, &["show", &head])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(stdout.starts_with(&format!("commit {head}\n")));
    assert_eq!(
        file_sections(&stdout),
        vec!["File: new.txt\nfresh\nNew file\n".to_string()]
    );

    Ok(())
}

#[rstest]
fn unchanged_file_is_listed_with_only_context_lines(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "f.txt", "same", "First");
    commit_file(dir, "f.txt", "same", "Again");

    let head = get_head_commit_sha(dir)?;
    let output = run_crookie_command(dir, &["show", &head])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        file_sections(&stdout),
        vec!["File: f.txt\nsame\nDiff:\n same\n".to_string()]
    );

    Ok(())
}
