//! Data structures and algorithms
//!
//! - `core`: Terminal output (pager wrapper)
//! - `diff`: Myers' line diff and per-commit file inspection
//! - `index`: Staging entry format
//! - `log`: Commit history traversal
//! - `objects`: Stored object types (blob, commit) and their identifiers

pub mod core;
pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
