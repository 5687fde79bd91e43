//! Command implementations
//!
//! - `plumbing`: Low-level object, index and commit operations
//! - `porcelain`: User-facing workflows (init, add, commit, log, show)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into higher-level operations.

pub mod plumbing;
pub mod porcelain;
