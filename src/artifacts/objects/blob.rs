//! Blob object
//!
//! A blob is an immutable snapshot of one file's content at the moment it was
//! staged. Its id is a pure function of the path and the content, so two
//! blobs staged from identical `(path, content)` pairs are interchangeable
//! and comparing ids is enough to detect an unchanged file.

use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    path: String,
    content: String,
    id: ObjectId,
}

impl Blob {
    pub fn new(path: &str, content: String) -> Self {
        let id = Self::compute_id(path, &content);

        Blob {
            path: path.to_string(),
            content,
            id,
        }
    }

    fn compute_id(path: &str, content: &str) -> ObjectId {
        ObjectId::digest(&[path.as_bytes(), content.as_bytes()])
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }
}
