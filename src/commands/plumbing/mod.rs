//! Plumbing commands (low-level operations)
//!
//! Plumbing provides direct access to the object store, the staging index and
//! the commit graph. Porcelain commands compose these into user workflows.
//!
//! ## Commands
//!
//! - `cat-file`: Print the raw bytes of a stored object
//! - `hash-object`: Compute a blob digest and optionally store it
//! - `rev_parse`: Read HEAD and resolve commit digests
//! - `update_index`: Append to, read and clear the staging index
//! - `write_commit`: Snapshot the index into a commit and move HEAD

pub mod cat_file;
pub mod hash_object;
pub mod rev_parse;
pub mod update_index;
pub mod write_commit;
