//! A minimal content-addressable version control core
//!
//! Files are stored as immutable blobs keyed by their SHA-1 digest, staged in
//! an ordered index, and recorded in commits that form a singly-linked history
//! ending at HEAD. Commits can be inspected as line diffs against their parent.
//!
//! - `areas`: Persisted repository state (object store, index, HEAD)
//! - `artifacts`: Object types, diff engine and history traversal
//! - `commands`: Plumbing and porcelain operations on a [`Repository`]
//! - `errors`: Error kinds surfaced by the core
//!
//! [`Repository`]: areas::repository::Repository

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
