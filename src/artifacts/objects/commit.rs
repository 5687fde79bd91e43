//! Commit object
//!
//! Commits snapshot the staging index at a point in time. They contain:
//! - A timestamp (UTC)
//! - The commit message
//! - The ordered list of staged `(path, digest)` entries
//! - The parent commit ID (absent for the root commit)
//!
//! ## Format
//!
//! On disk, a compact JSON record whose key order is fixed:
//! ```text
//! {"timeStamp":"2024-01-01T12:00:00.000Z","message":"...","files":[{"path":"a.txt","hash":"..."}],"parent":null}
//! ```
//!
//! The commit ID is the digest of exactly these bytes.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Immutable commit record
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<IndexEntry>,
    parent: Option<ObjectId>,
}

/// On-disk shape of a commit; field order is the key order
#[derive(Serialize, Deserialize)]
struct CommitRecord {
    #[serde(rename = "timeStamp", with = "iso_timestamp")]
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<IndexEntry>,
    #[serde(default, deserialize_with = "empty_parent_as_none")]
    parent: Option<ObjectId>,
}

impl From<&Commit> for CommitRecord {
    fn from(commit: &Commit) -> Self {
        CommitRecord {
            timestamp: commit.timestamp,
            message: commit.message.clone(),
            files: commit.files.clone(),
            parent: commit.parent.clone(),
        }
    }
}

impl From<CommitRecord> for Commit {
    fn from(record: CommitRecord) -> Self {
        Commit::new(record.timestamp, record.message, record.files, record.parent)
    }
}

impl Commit {
    pub fn new(
        timestamp: DateTime<Utc>,
        message: String,
        files: Vec<IndexEntry>,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            timestamp,
            message,
            files,
            parent,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &[IndexEntry] {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// First entry recorded under `path`, if any
    pub fn file_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> RepositoryResult<Bytes> {
        let content = serde_json::to_vec(&CommitRecord::from(self))
            .map_err(|e| RepositoryError::corrupt("<unsaved commit>", e))?;

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(oid: &ObjectId, content: Bytes) -> RepositoryResult<Self> {
        serde_json::from_slice::<CommitRecord>(&content)
            .map(Commit::from)
            .map_err(|e| RepositoryError::corrupt(oid, e))
    }
}

impl Object for Commit {}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix
mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Root commits written by older tools carry `"parent": ""`
fn empty_parent_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ObjectId>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => ObjectId::try_parse(raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
