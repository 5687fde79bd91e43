use crate::areas::database::ObjectStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::HashSet;

/// Lazy walk from a commit to the root, most recent first
///
/// The walk ends after the root commit. An unreadable commit or a digest that
/// shows up twice yields one error and ends the walk.
pub struct RevList<'r> {
    database: &'r dyn ObjectStore,
    current_commit_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r dyn ObjectStore, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = RepositoryResult<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        if !self.visited.insert(commit_oid.clone()) {
            return Some(Err(RepositoryError::corrupt(
                &commit_oid,
                "commit history loops back on itself",
            )));
        }

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                tracing::debug!(oid = %commit_oid, parent = ?commit.parent(), "visited commit");
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
