//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose plumbing into the everyday workflow and print
//! their results through the repository writer.
//!
//! ## Commands
//!
//! - `init`: Create the repository layout
//! - `add`: Store files and stage them
//! - `commit`: Record the staged files as a new commit
//! - `log`: Show commit history from HEAD back to the root
//! - `show`: Show a commit and the per-file diff against its parent

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
