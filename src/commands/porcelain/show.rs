use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::{CommitDiff, FileChange, FileReport};
use crate::artifacts::diff::diff_algorithm::Edit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::porcelain::log::LogOptions;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Per-file changes of the commit at `oid` against its parent
    pub fn commit_diff(&self, oid: &ObjectId) -> anyhow::Result<CommitDiff> {
        Ok(CommitDiff::compute(self.database(), oid)?)
    }

    pub fn show(&self, commit_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit_oid = Self::parse_object_id(commit_id)?;
        let commit_diff = self.commit_diff(&commit_oid)?;

        self.display_commit(&commit_oid, &commit_diff.commit, &LogOptions::default())?;

        for report in &commit_diff.files {
            writeln!(self.writer())?;
            self.print_file_report(report)?;
        }

        let failures = commit_diff.failures().count();
        if failures > 0 {
            anyhow::bail!(
                "{} of {} file(s) in commit {} could not be inspected",
                failures,
                commit_diff.files.len(),
                commit_oid
            );
        }

        Ok(())
    }

    fn print_file_report(&self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("File: {}", report.path).bold())?;

        let change = match &report.outcome {
            Ok(change) => change,
            Err(e) => {
                tracing::debug!(path = %report.path, oid = %report.oid, "inspection failed");
                eprintln!("{}", format!("error: {}: {e}", report.path).red());
                return Ok(());
            }
        };

        for line in change.content().lines() {
            writeln!(self.writer(), "{}", line)?;
        }

        match change {
            FileChange::RootCommit { .. } => {
                writeln!(self.writer(), "{}", "First commit".cyan())?;
            }
            FileChange::NewFile { .. } => {
                writeln!(self.writer(), "{}", "New file".cyan())?;
            }
            FileChange::Modified { edits, .. } => {
                writeln!(self.writer(), "{}", "Diff:".cyan())?;
                for edit in edits {
                    self.print_edit(edit)?;
                }
            }
        }

        Ok(())
    }

    fn print_edit(&self, edit: &Edit<String>) -> anyhow::Result<()> {
        let line = match edit {
            Edit::Insert { .. } => edit.to_string().green(),
            Edit::Delete { .. } => edit.to_string().red(),
            Edit::Equal { .. } => edit.to_string().dimmed(),
        };

        writeln!(self.writer(), "{}", line)?;

        Ok(())
    }
}
