//! Repository error kinds
//!
//! Core operations (object store, index, refs, commit graph, inspection)
//! return [`RepositoryError`] so callers can tell the failure kinds apart.
//! The command layer wraps them in `anyhow` with extra context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The source file of an `add` is missing or unreadable
    #[error("unable to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An object could not be persisted to the store
    #[error("unable to write object {oid}: {source}")]
    StoreWrite {
        oid: String,
        #[source]
        source: std::io::Error,
    },

    #[error("object {oid} not found")]
    NotFound { oid: String },

    /// Stored bytes do not decode into the expected record
    #[error("corrupt object {object}: {reason}")]
    CorruptObject { object: String, reason: String },

    #[error("repository already initialized in {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("not a crookie repository (missing {path})")]
    NotARepository { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub fn not_found(oid: impl ToString) -> Self {
        RepositoryError::NotFound {
            oid: oid.to_string(),
        }
    }

    pub fn corrupt(object: impl ToString, reason: impl ToString) -> Self {
        RepositoryError::CorruptObject {
            object: object.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Informational conditions that should not fail a command
    pub fn is_benign(&self) -> bool {
        matches!(self, RepositoryError::AlreadyInitialized { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
