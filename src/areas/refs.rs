//! HEAD reference
//!
//! HEAD is the only reference: a single file holding either nothing (no
//! commits yet) or the 40-character digest of the latest commit. It is
//! rewritten by every commit and never points anywhere else.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.crookie`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Read the current head commit
    ///
    /// # Returns
    ///
    /// None if HEAD is missing or empty, i.e. before the first commit
    pub fn read_head(&self) -> RepositoryResult<Option<ObjectId>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .map_err(|e| RepositoryError::corrupt(HEAD_REF_NAME, e))
    }

    pub fn update_head(&self, oid: &ObjectId) -> RepositoryResult<()> {
        std::fs::write(self.head_path(), oid.as_ref())?;
        tracing::debug!(oid = %oid, "moved head");

        Ok(())
    }

    /// Create an empty HEAD unless one exists already
    pub fn create_head(&self) -> RepositoryResult<()> {
        let head_path = self.head_path();
        if !head_path.exists() {
            std::fs::write(head_path, b"")?;
        }

        Ok(())
    }
}
