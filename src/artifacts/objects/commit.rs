//! Commit object
//!
//! A commit is an immutable snapshot of every tracked file plus metadata and
//! parent links. The id is derived from the message, the formatted creation
//! timestamp and the FIRST parent's id only; a merge commit receives its
//! second parent through one explicit post-construction attachment that
//! leaves the id untouched.
//!
//! The initial commit is fully deterministic: fixed message, the Unix epoch
//! as timestamp and no parents, so repeated `init` runs of fresh
//! repositories agree on the root id.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Timestamp rendering that feeds the id hash.
const ID_TIMESTAMP_FORMAT: &str = "%d-%-m-%Y %I:%M:%S";

/// Timestamp rendering for log output, pinned to GMT-8.
const DISPLAY_TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";
const DISPLAY_UTC_OFFSET_SECS: i32 = -8 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    message: String,
    timestamp: DateTime<Utc>,
    parents: Vec<ObjectId>,
    id: ObjectId,
    snapshot: BTreeMap<String, Blob>,
}

impl Commit {
    /// The deterministic root commit: empty snapshot, no parents, epoch
    /// timestamp.
    pub fn initial() -> Self {
        Self::build(
            INITIAL_COMMIT_MESSAGE.to_string(),
            DateTime::UNIX_EPOCH,
            Vec::new(),
            BTreeMap::new(),
        )
    }

    /// Create a commit stamped with the current time.
    ///
    /// Persistence is the caller's responsibility.
    pub fn new(message: String, parents: Vec<ObjectId>, snapshot: BTreeMap<String, Blob>) -> Self {
        Self::build(message, Utc::now(), parents, snapshot)
    }

    fn build(
        message: String,
        timestamp: DateTime<Utc>,
        parents: Vec<ObjectId>,
        snapshot: BTreeMap<String, Blob>,
    ) -> Self {
        let id = Self::compute_id(&message, &timestamp, &parents);

        Commit {
            message,
            timestamp,
            parents,
            id,
            snapshot,
        }
    }

    fn compute_id(message: &str, timestamp: &DateTime<Utc>, parents: &[ObjectId]) -> ObjectId {
        let formatted_timestamp = timestamp.format(ID_TIMESTAMP_FORMAT).to_string();
        let first_parent = parents.first().map(|oid| oid.as_ref()).unwrap_or_default();

        ObjectId::digest(&[
            message.as_bytes(),
            formatted_timestamp.as_bytes(),
            first_parent.as_bytes(),
        ])
    }

    /// Turn a freshly created commit into a merge commit by attaching the
    /// merged-in branch's tip as second parent.
    ///
    /// The id stays a function of the first parent only, so the attachment
    /// must not be visible in the id. Invoked exactly once, immediately
    /// after construction.
    pub fn attach_merge_parent(&mut self, other: ObjectId) {
        self.parents.push(other);
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn snapshot(&self) -> &BTreeMap<String, Blob> {
        &self.snapshot
    }

    pub fn tracks(&self, path: &str) -> bool {
        self.snapshot.contains_key(path)
    }

    pub fn blob(&self, path: &str) -> Option<&Blob> {
        self.snapshot.get(path)
    }

    /// The log rendering of the creation time, e.g.
    /// `Wed Dec 31 16:00:00 1969 -0800`.
    pub fn readable_timestamp(&self) -> String {
        let offset =
            FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS).expect("display offset is in range");

        self.timestamp
            .with_timezone(&offset)
            .format(DISPLAY_TIMESTAMP_FORMAT)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(entries: &[(&str, &str)]) -> BTreeMap<String, Blob> {
        entries
            .iter()
            .map(|(path, content)| (path.to_string(), Blob::new(path, content.to_string())))
            .collect()
    }

    #[test]
    fn initial_commit_is_deterministic() {
        let a = Commit::initial();
        let b = Commit::initial();

        assert_eq!(a.id(), b.id());
        assert!(a.parents().is_empty());
        assert!(a.snapshot().is_empty());
        assert_eq!(a.message(), "initial commit");
    }

    #[test]
    fn initial_commit_renders_the_epoch_in_the_display_zone() {
        let initial = Commit::initial();

        assert_eq!(initial.readable_timestamp(), "Wed Dec 31 16:00:00 1969 -0800");
    }

    #[test]
    fn attaching_a_merge_parent_does_not_alter_the_id() {
        let root = Commit::initial();
        let mut commit = Commit::new(
            "merge candidate".to_string(),
            vec![root.id().clone()],
            snapshot_of(&[("a.txt", "one")]),
        );
        let id_before = commit.id().clone();

        commit.attach_merge_parent(ObjectId::digest(&[b"other tip"]));

        assert_eq!(commit.id(), &id_before);
        assert_eq!(commit.parents().len(), 2);
        assert_eq!(commit.first_parent(), Some(root.id()));
    }

    #[test]
    fn id_depends_on_the_first_parent() {
        let snapshot = snapshot_of(&[("a.txt", "one")]);
        let a = Commit::new(
            "same message".to_string(),
            vec![ObjectId::digest(&[b"parent a"])],
            snapshot.clone(),
        );
        let b = Commit::new(
            "same message".to_string(),
            vec![ObjectId::digest(&[b"parent b"])],
            snapshot,
        );

        assert_ne!(a.id(), b.id());
    }
}
