use crate::areas::database::ObjectStore;
use crate::artifacts::diff::diff_algorithm::{Edit, diff_lines};
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;

/// What a commit did to one of its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// The commit has no parent; nothing to compare against
    RootCommit { content: String },
    /// The parent commit does not list this path
    NewFile { content: String },
    /// The parent lists this path; `edits` turn its version into this one
    Modified {
        content: String,
        edits: Vec<Edit<String>>,
    },
}

impl FileChange {
    pub fn content(&self) -> &str {
        match self {
            FileChange::RootCommit { content }
            | FileChange::NewFile { content }
            | FileChange::Modified { content, .. } => content,
        }
    }
}

/// Outcome of inspecting one file entry
///
/// Failures are kept per file so one unreadable blob does not hide the rest.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub oid: ObjectId,
    pub outcome: RepositoryResult<FileChange>,
}

#[derive(Debug)]
pub struct CommitDiff {
    pub oid: ObjectId,
    pub commit: Commit,
    pub files: Vec<FileReport>,
}

impl CommitDiff {
    /// Inspect every file of the commit at `oid` against its parent
    ///
    /// Resolving the commit or its parent is all-or-nothing; reading the
    /// individual blobs is not. When a path appears more than once, every
    /// entry is reported and each is compared with the first parent entry
    /// carrying that path.
    pub fn compute(database: &dyn ObjectStore, oid: &ObjectId) -> RepositoryResult<Self> {
        let commit = database.load_commit(oid)?;
        let parent = commit
            .parent()
            .map(|parent_oid| database.load_commit(parent_oid))
            .transpose()?;

        let files = commit
            .files()
            .iter()
            .map(|entry| FileReport {
                path: entry.path.clone(),
                oid: entry.oid.clone(),
                outcome: Self::inspect_file(database, entry, parent.as_ref()),
            })
            .collect::<Vec<_>>();

        Ok(CommitDiff {
            oid: oid.clone(),
            commit,
            files,
        })
    }

    fn inspect_file(
        database: &dyn ObjectStore,
        entry: &IndexEntry,
        parent: Option<&Commit>,
    ) -> RepositoryResult<FileChange> {
        let content = database.load_blob(&entry.oid)?.text();

        let Some(parent) = parent else {
            return Ok(FileChange::RootCommit { content });
        };

        match parent.file_by_path(&entry.path) {
            None => Ok(FileChange::NewFile { content }),
            Some(parent_entry) => {
                let parent_content = database.load_blob(&parent_entry.oid)?.text();
                let edits = diff_lines(&parent_content, &content);

                Ok(FileChange::Modified { content, edits })
            }
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|report| report.outcome.is_err())
    }
}
