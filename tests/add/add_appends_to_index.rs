use crate::common::command::{init_repository_dir, read_index, run_crookie_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::sha1_hex;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn re_adding_a_path_keeps_both_entries(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let file = dir.join("notes.txt");

    write_file(FileSpec::new(file.clone(), "draft".to_string()));
    run_crookie_command(dir, &["add", "notes.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(file, "final".to_string()));
    run_crookie_command(dir, &["add", "notes.txt"])
        .assert()
        .success();

    assert_eq!(
        read_index(dir)?,
        serde_json::json!([
            { "path": "notes.txt", "hash": sha1_hex("draft") },
            { "path": "notes.txt", "hash": sha1_hex("final") },
        ])
    );

    Ok(())
}

#[rstest]
fn nested_paths_are_recorded_relative_to_the_root(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join("src").join("lib.rs"),
        "pub fn f() {}".to_string(),
    ));

    run_crookie_command(dir, &["add", "src/lib.rs"])
        .assert()
        .success();

    assert_eq!(read_index(dir)?[0]["path"], "src/lib.rs");

    Ok(())
}
