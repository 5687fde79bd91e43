use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> RepositoryResult<Bytes>;
}

pub trait Unpackable {
    /// Decode stored bytes; `oid` is only used to label errors
    fn deserialize(oid: &ObjectId, content: Bytes) -> RepositoryResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_id(&self) -> RepositoryResult<ObjectId> {
        Ok(ObjectId::from_content(&self.serialize()?))
    }
}
