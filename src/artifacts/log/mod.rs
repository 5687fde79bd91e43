//! Commit history traversal
//!
//! History is a singly-linked list: every commit names at most one parent.
//! `rev_list` walks it lazily from a starting commit (usually HEAD) back to
//! the root, strictly by parent links and never by timestamp.

pub mod rev_list;
