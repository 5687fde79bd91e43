use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A `(path, digest)` pair awaiting commit or recorded in a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    pub path: String,
    #[serde(rename = "hash")]
    pub oid: ObjectId,
}
