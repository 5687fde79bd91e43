use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;

impl Repository {
    /// Append `(path, oid)` to the persisted index
    ///
    /// The digest is not checked against the store here; `add` stores the
    /// blob before staging it.
    pub async fn stage(&self, path: &str, oid: ObjectId) -> RepositoryResult<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        index.add(IndexEntry::new(path.to_string(), oid));
        index.write_updates()
    }

    /// Current staged entries, in the order they were added
    pub async fn snapshot(&self) -> RepositoryResult<Vec<IndexEntry>> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        Ok(index.entries().to_vec())
    }

    pub async fn clear_index(&self) -> RepositoryResult<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.clear();
        index.write_updates()
    }
}
