//! Diff algorithms and commit inspection
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `commit_diff`: Per-file changes of a commit against its parent

pub mod commit_diff;
pub mod diff_algorithm;
