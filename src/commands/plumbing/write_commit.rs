use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use chrono::{DateTime, SubsecRound, Utc};

/// Environment variable overriding the commit timestamp (RFC 3339)
pub const COMMIT_DATE_ENV: &str = "CROOKIE_COMMIT_DATE";

impl Repository {
    /// Snapshot the staging index into a new commit on top of HEAD
    ///
    /// Steps, in order: read the index, read HEAD, build and store the
    /// commit, move HEAD, clear the index. A failure stops at that step and
    /// leaves whatever the earlier steps wrote.
    pub async fn write_commit(&self, message: String) -> RepositoryResult<(ObjectId, Commit)> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;
        let files = index.entries().to_vec();

        if let Some(missing) = files
            .iter()
            .find(|entry| !self.database().contains(&entry.oid))
        {
            return Err(RepositoryError::not_found(&missing.oid));
        }

        let parent = self.refs().read_head()?;
        if let Some(parent) = &parent {
            // the new commit may only point at a readable commit
            self.resolve_commit(parent)?;
        }

        let commit = Commit::new(Self::commit_timestamp(), message, files, parent);
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        tracing::debug!(oid = %commit_id, files = commit.files().len(), "created commit");

        Ok((commit_id, commit))
    }

    fn commit_timestamp() -> DateTime<Utc> {
        let date_override = std::env::var(COMMIT_DATE_ENV).ok();

        Self::commit_time(date_override.as_deref(), Utc::now())
    }

    /// Commit time, truncated to the millisecond precision commits are stored with
    ///
    /// An override that is not RFC 3339 is ignored and `now` is used.
    fn commit_time(date_override: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
        let timestamp = date_override.and_then(|date_str| {
            DateTime::parse_from_rfc3339(date_str)
                .inspect_err(|e| tracing::warn!("ignoring {COMMIT_DATE_ENV}={date_str}: {e}"))
                .ok()
        });

        let timestamp = match timestamp {
            Some(ts) => ts.with_timezone(&Utc),
            None => now,
        };

        timestamp.trunc_subsecs(3)
    }
}
