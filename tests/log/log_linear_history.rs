use crate::common::command::{
    commit_file, committed_repository_dir, get_head_commit_sha, get_parent_commit_id,
    init_repository_dir, run_crookie_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn single_root_commit_yields_one_record(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = committed_repository_dir.path();
    let head = get_head_commit_sha(dir)?;

    run_crookie_command(dir, &["log"])
        .assert()
        .success()
        .stdout(format!(
            "commit {head}\nDate:   Sun Jan 1 12:00:00 2023 +0000\n\n    Initial commit\n"
        ));

    Ok(())
}

#[rstest]
fn history_is_listed_newest_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "f.txt", "1", "First");
    commit_file(dir, "f.txt", "2", "Second");
    commit_file(dir, "f.txt", "3", "Third");

    let third = get_head_commit_sha(dir)?;
    let second = get_parent_commit_id(dir, &third)?.ok_or("second commit has no parent")?;
    let first = get_parent_commit_id(dir, &second)?.ok_or("first commit has no parent")?;

    let output = run_crookie_command(dir, &["log"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let commit_lines = stdout
        .lines()
        .filter(|line| line.starts_with("commit "))
        .collect::<Vec<_>>();
    assert_eq!(
        commit_lines,
        vec![
            format!("commit {third}"),
            format!("commit {second}"),
            format!("commit {first}"),
        ]
    );

    // records are separated by a single blank line
    assert!(stdout.contains("    Third\n\ncommit "));
    assert!(stdout.ends_with("    First\n"));

    Ok(())
}

#[rstest]
#[case::full(&["log", "--oneline"], 40)]
#[case::abbreviated(&["log", "--oneline", "--abbrev-commit"], 7)]
fn oneline_format(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] digest_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "f.txt", "1", "First");
    commit_file(dir, "f.txt", "2", "Second\n\nbody");

    let head = get_head_commit_sha(dir)?;

    let output = run_crookie_command(dir, args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let lines = stdout.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{} Second", &head[..digest_length]));
    assert!(lines[1].ends_with(" First"));

    Ok(())
}
