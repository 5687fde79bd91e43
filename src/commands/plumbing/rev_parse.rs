use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};

impl Repository {
    /// Digest of the latest commit, or None before the first commit
    pub fn current_head(&self) -> RepositoryResult<Option<ObjectId>> {
        self.refs().read_head()
    }

    /// Fetch and decode the commit stored under `oid`
    ///
    /// Fails with `NotFound` if nothing is stored there and with
    /// `CorruptObject` if the stored bytes are not a well-formed commit.
    pub fn resolve_commit(&self, oid: &ObjectId) -> RepositoryResult<Commit> {
        self.database().load_commit(oid)
    }

    /// Parse a user-supplied digest
    ///
    /// Text that cannot be a digest cannot name a stored object either, so it
    /// is reported as not found.
    pub fn parse_object_id(raw: &str) -> RepositoryResult<ObjectId> {
        ObjectId::try_parse(raw.trim().to_string()).map_err(|_| RepositoryError::not_found(raw))
    }
}
