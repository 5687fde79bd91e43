//! Core repository components
//!
//! This module contains the persisted state of a repository:
//!
//! - `database`: Content-addressable object store for blobs and commits
//! - `index`: Staging area listing the files for the next commit
//! - `refs`: The HEAD pointer to the latest commit
//! - `repository`: Handle that ties the pieces together
//! - `workspace`: Reading files from the working directory

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
