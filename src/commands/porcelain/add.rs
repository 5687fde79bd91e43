use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Store each file as a blob and stage it
    ///
    /// The index is written once, after every file has been stored, so an
    /// unreadable file leaves the index as it was. Blobs stored before the
    /// failure stay in the store.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<Vec<ObjectId>> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let mut blob_ids = Vec::with_capacity(paths.len());
        for path in paths {
            let path = Path::new(path);
            let data = self.workspace().read_file(path)?;

            let blob_id = self.database().store(&Blob::new(data))?;
            index.add(IndexEntry::new(self.workspace().entry_name(path), blob_id.clone()));

            blob_ids.push(blob_id);
        }

        index.write_updates()?;

        for blob_id in &blob_ids {
            writeln!(self.writer(), "{}", blob_id)?;
        }

        Ok(blob_ids)
    }
}
