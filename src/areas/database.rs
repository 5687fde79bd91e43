//! Content-addressable object store
//!
//! Objects are keyed by the SHA-1 digest of their bytes and are write-once:
//! putting content whose digest is already present is a no-op, so identical
//! file versions are stored a single time and every key is tamper-evident.
//!
//! Two stores implement [`ObjectStore`]:
//! - [`Database`]: `.crookie/objects/<xx>/<yyyy...>` on disk
//! - [`MemoryDatabase`]: a map in memory, for driving the commit graph without I/O

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use bytes::Bytes;
use fake::rand;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait ObjectStore {
    /// Store content under its digest unless already present
    fn put(&self, content: &[u8]) -> RepositoryResult<ObjectId>;

    /// Fetch stored content, failing with `NotFound` if absent
    fn get(&self, object_id: &ObjectId) -> RepositoryResult<Bytes>;

    fn contains(&self, object_id: &ObjectId) -> bool;
}

impl dyn ObjectStore + '_ {
    pub fn store(&self, object: &impl Object) -> RepositoryResult<ObjectId> {
        self.put(&object.serialize()?)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> RepositoryResult<Blob> {
        Blob::deserialize(object_id, self.get(object_id)?)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> RepositoryResult<Commit> {
        Commit::deserialize(object_id, self.get(object_id)?)
    }
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> RepositoryResult<Bytes> {
        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::not_found(object_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_object(&self, object_path: &Path, object_content: &[u8]) -> std::io::Result<()> {
        let object_dir = object_path.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid object path {}", object_path.display()),
            )
        })?;
        std::fs::create_dir_all(object_dir)?;

        let temp_object_path = object_dir.join(Self::generate_temp_name());
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)?;

        // rename the temp file to the object file to make it atomic
        let result = file
            .write_all(object_content)
            .and_then(|_| std::fs::rename(&temp_object_path, object_path));
        if result.is_err() {
            let _ = std::fs::remove_file(&temp_object_path);
        }

        result
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

impl ObjectStore for Database {
    fn put(&self, content: &[u8]) -> RepositoryResult<ObjectId> {
        let object_id = ObjectId::from_content(content);
        let object_path = self.path.join(object_id.to_path());

        if object_path.is_file() {
            tracing::debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.write_object(&object_path, content)
            .map_err(|source| RepositoryError::StoreWrite {
                oid: object_id.to_string(),
                source,
            })?;
        tracing::debug!(oid = %object_id, bytes = content.len(), "stored object");

        Ok(object_id)
    }

    fn get(&self, object_id: &ObjectId) -> RepositoryResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());
        tracing::debug!(oid = %object_id, "loading object");

        self.read_object(object_id, object_path)
    }

    fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }
}

/// In-memory object store
///
/// Counts physical writes so deduplication can be observed.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    objects: RefCell<HashMap<ObjectId, Bytes>>,
    writes: Cell<usize>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Overwrite raw bytes under a key, bypassing content addressing
    ///
    /// Only meant for simulating on-disk corruption.
    pub fn insert_raw(&self, object_id: ObjectId, content: Bytes) {
        self.objects.borrow_mut().insert(object_id, content);
    }
}

impl ObjectStore for MemoryDatabase {
    fn put(&self, content: &[u8]) -> RepositoryResult<ObjectId> {
        let object_id = ObjectId::from_content(content);
        let mut objects = self.objects.borrow_mut();

        if !objects.contains_key(&object_id) {
            objects.insert(object_id.clone(), Bytes::copy_from_slice(content));
            self.writes.set(self.writes.get() + 1);
        }

        Ok(object_id)
    }

    fn get(&self, object_id: &ObjectId) -> RepositoryResult<Bytes> {
        self.objects
            .borrow()
            .get(object_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(object_id))
    }

    fn contains(&self, object_id: &ObjectId) -> bool {
        self.objects.borrow().contains_key(object_id)
    }
}
