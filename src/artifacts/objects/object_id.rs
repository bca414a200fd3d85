//! Object identifier (SHA-1 hash)
//!
//! Object ids are 40-character lowercase hexadecimal strings. Blobs and
//! commits both derive their ids from semantically meaningful byte strings,
//! not from their serialized form, so the hash recipe lives with each type
//! and this module only provides the digest primitive and the newtype.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// A validated 40-character hexadecimal object id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            anyhow::bail!("invalid object id length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid object id characters: {}", id);
        }
        Ok(Self(id))
    }

    /// Hash a sequence of byte chunks into an object id.
    ///
    /// The digest of a SHA-1 hasher is always 20 bytes, so the hex rendering
    /// is a valid id by construction.
    pub fn digest(chunks: &[&[u8]]) -> Self {
        let mut hasher = Sha1::new();
        for chunk in chunks {
            hasher.update(chunk);
        }

        let oid = hasher.finalize();
        Self(format!("{oid:x}"))
    }

    /// Abbreviated form of the object id (first 7 characters).
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let a = ObjectId::digest(&[b"alpha", b"beta"]);
        let b = ObjectId::digest(&[b"alpha", b"beta"]);
        assert_eq!(a, b);
    }

    #[test]
    fn digest_produces_a_parseable_id() {
        let oid = ObjectId::digest(&[b"content"]);
        assert!(ObjectId::try_parse(oid.as_ref().to_string()).is_ok());
    }

    #[test]
    fn try_parse_rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
    }

    #[test]
    fn try_parse_rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(40)).is_err());
    }

    #[test]
    fn short_oid_is_seven_characters() {
        let oid = ObjectId::digest(&[b"content"]);
        assert_eq!(oid.to_short_oid().len(), 7);
        assert!(oid.as_ref().starts_with(&oid.to_short_oid()));
    }
}
