//! Staging index
//!
//! The index tracks which file versions go into the next commit. It is an
//! ordered list: adding a path that is already staged appends a second
//! entry instead of replacing the first, and the whole list is cleared when
//! a commit is created.
//!
//! The in-memory entries are only authoritative after [`Index::rehydrate`];
//! mutations are persisted by [`Index::write_updates`].

use crate::artifacts::index::index_entry::IndexEntry;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.crookie/index`)
    path: Box<Path>,
    /// Staged entries in insertion order
    entries: Vec<IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    /// Load the index from disk
    ///
    /// A missing or blank index file is an empty index.
    pub fn rehydrate(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::corrupt(self.path.display(), e))?;
        tracing::debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    pub fn add(&mut self, entry: IndexEntry) {
        tracing::debug!(path = %entry.path, oid = %entry.oid, "staging entry");
        self.entries.push(entry);
        self.changed = true;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Persist the entries if they changed since the last load or write
    pub fn write_updates(&mut self) -> RepositoryResult<()> {
        if !self.changed {
            return Ok(());
        }

        let content = serde_json::to_vec(&self.entries)
            .map_err(|e| RepositoryError::corrupt(self.path.display(), e))?;
        std::fs::write(&self.path, content)?;

        self.changed = false;

        Ok(())
    }
}
