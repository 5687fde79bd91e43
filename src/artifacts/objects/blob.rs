//! Blob object
//!
//! Blobs store file content. They hold only the raw bytes, without the
//! file name (that lives in the staging entry) and without any header.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use bytes::Bytes;
use derive_new::new;

/// Immutable content of one file version
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content rendered as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl From<&str> for Blob {
    fn from(value: &str) -> Self {
        Blob::new(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> RepositoryResult<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(_oid: &ObjectId, content: Bytes) -> RepositoryResult<Self> {
        Ok(Self::new(content))
    }
}

impl Object for Blob {}
