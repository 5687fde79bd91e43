//! Staging index file format
//!
//! The index (staging area) lists the files marked for the next commit, in the
//! order they were added. It is persisted as a JSON array:
//!
//! ```text
//! [{"path":"1.txt","hash":"<40 hex digest>"},{"path":"a/2.txt","hash":"..."}]
//! ```
//!
//! The same entry shape is embedded in commit records.

pub mod index_entry;
