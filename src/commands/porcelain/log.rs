use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
    /// Commit to start from instead of HEAD
    pub start: Option<String>,
}

impl Repository {
    /// Walk from HEAD (or `start`) to the root commit
    pub fn rev_list(&self, start: Option<ObjectId>) -> anyhow::Result<RevList<'_>> {
        let start = match start {
            Some(start) => Some(start),
            None => self.current_head()?,
        };

        Ok(RevList::new(self.database(), start))
    }

    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let start = opts
            .start
            .as_deref()
            .map(Self::parse_object_id)
            .transpose()?;

        for (index, item) in self.rev_list(start)?.enumerate() {
            let (commit_oid, commit) = item?;

            if index > 0 && !opts.oneline {
                writeln!(self.writer())?;
            }
            self.display_commit(&commit_oid, &commit, opts)?;
        }

        Ok(())
    }

    pub fn display_commit(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        opts: &LogOptions,
    ) -> anyhow::Result<()> {
        if opts.oneline {
            self.show_commit_oneline(commit_oid, commit, opts.abbrev_commit)
        } else {
            self.show_commit_medium(commit_oid, commit, opts.abbrev_commit)
        }
    }

    fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        abbrev_commit: bool,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", Self::abbrev_commit_id(commit_oid, abbrev_commit)).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        abbrev_commit: bool,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            Self::abbrev_commit_id(commit_oid, abbrev_commit).yellow(),
            commit.short_message()
        )?;

        Ok(())
    }

    fn abbrev_commit_id(commit_oid: &ObjectId, abbrev_commit: bool) -> String {
        if abbrev_commit {
            commit_oid.to_short_oid()
        } else {
            commit_oid.to_string()
        }
    }
}
