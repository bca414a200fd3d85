//! Staging area
//!
//! The pending-change buffer between the working directory and the next
//! commit. The in-memory half (`StagingArea`) travels inside the serialized
//! repository state; the on-disk half (`StagingStore`) mirrors staged paths
//! with their pending content so a staged version survives later edits of
//! the working file.
//!
//! A path is never pending as both an update and a removal: staging clears a
//! pending removal for the path, and marking a removal unstages it first.

use crate::artifacts::objects::blob::Blob;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingArea {
    staged: BTreeMap<String, Blob>,
    removed: BTreeSet<String>,
}

impl StagingArea {
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    /// Insert or replace the pending version of the blob's path.
    pub fn stage(&mut self, blob: Blob) {
        self.removed.remove(blob.path());
        self.staged.insert(blob.path().to_string(), blob);
    }

    pub fn unstage(&mut self, path: &str) -> Option<Blob> {
        self.staged.remove(path)
    }

    pub fn mark_removed(&mut self, path: &str) {
        self.staged.remove(path);
        self.removed.insert(path.to_string());
    }

    pub fn unmark_removed(&mut self, path: &str) {
        self.removed.remove(path);
    }

    pub fn is_staged(&self, path: &str) -> bool {
        self.staged.contains_key(path)
    }

    pub fn blob(&self, path: &str) -> Option<&Blob> {
        self.staged.get(path)
    }

    pub fn staged_paths(&self) -> impl Iterator<Item = &str> {
        self.staged.keys().map(String::as_str)
    }

    pub fn removed_paths(&self) -> impl Iterator<Item = &str> {
        self.removed.iter().map(String::as_str)
    }

    /// The next commit's snapshot: the head snapshot overlaid with every
    /// staged blob, minus every pending removal. Consulted by commit, not
    /// mutated by it.
    pub fn flush_to_snapshot(
        &self,
        head_snapshot: &BTreeMap<String, Blob>,
    ) -> BTreeMap<String, Blob> {
        let mut snapshot = head_snapshot.clone();

        for (path, blob) in &self.staged {
            snapshot.insert(path.clone(), blob.clone());
        }
        for path in &self.removed {
            snapshot.remove(path);
        }

        snapshot
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
    }
}

/// The staging content directory.
///
/// Holds one file per staged path with the pending byte content.
#[derive(Debug)]
pub struct StagingStore {
    path: Box<Path>,
}

impl StagingStore {
    pub fn new(path: Box<Path>) -> Self {
        StagingStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_entry(&self, name: &str, content: &str) -> anyhow::Result<()> {
        let entry_path = self.path.join(name);

        std::fs::write(&entry_path, content)
            .with_context(|| format!("unable to write staged content {}", entry_path.display()))
    }

    pub fn remove_entry(&self, name: &str) -> anyhow::Result<()> {
        let entry_path = self.path.join(name);

        if entry_path.exists() {
            std::fs::remove_file(&entry_path).with_context(|| {
                format!("unable to remove staged content {}", entry_path.display())
            })?;
        }

        Ok(())
    }

    /// Wipe every pending content file.
    pub fn clear(&self) -> anyhow::Result<()> {
        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("unable to list staging directory {}", self.path.display()))?
        {
            let entry = entry?;
            if entry.path().is_file() {
                std::fs::remove_file(entry.path()).with_context(|| {
                    format!("unable to clear staged content {}", entry.path().display())
                })?;
            }
        }

        Ok(())
    }
}
