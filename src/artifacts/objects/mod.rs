//! Stored object types
//!
//! Every value in the store is an object identified by the SHA-1 digest of its
//! stored bytes. There are two kinds:
//!
//! - **Blob**: File content (raw bytes, no header)
//! - **Commit**: JSON record snapshotting the staged files and the parent commit
//!
//! Commits live in the same namespace as blobs, so a commit digest is just the
//! digest of its serialized record.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
