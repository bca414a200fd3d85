//! Split point discovery for merge operations
//!
//! The split point is the common ancestor commit used as the base of the
//! three-way merge. Discovery walks two single-parent chains rather than
//! enumerating full ancestor sets:
//!
//! 1. The current tip's ancestry is collected by following, at each commit,
//!    the LAST parent link (the merged-in side of past merge commits),
//!    producing an ordered id sequence that ends at the root.
//! 2. If the other tip already appears in that sequence, the other branch is
//!    an ancestor of the current branch and the merge is rejected.
//! 3. Otherwise the other tip's ancestry is walked by FIRST parent links and
//!    the first id found in the current sequence is the split point.
//!
//! This is not a general lowest-common-ancestor computation over an
//! arbitrary DAG; on criss-cross histories the asymmetric chains can settle
//! on a non-minimal ancestor. For the shallow, mostly linear histories this
//! engine produces, the walk is exact.
//!
//! Debug logging of the traversal is compiled in with the `debug_merge`
//! feature flag (`cargo build --features debug_merge`).

use crate::artifacts::objects::object_id::ObjectId;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Outcome of the split point search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPoint {
    /// The other tip is already part of the current ancestry; there is
    /// nothing to merge from it.
    AncestorOfCurrent,
    /// The common ancestor to use as merge base.
    Commit(ObjectId),
}

/// Finds the split point between two branch tips.
///
/// Generic over a loader function so the walk can run against the on-disk
/// commit store or an in-memory graph in tests. The loader returns a
/// commit's parent ids, empty for the root commit.
pub struct SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> SplitPointFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    pub fn find(&self, current_tip: &ObjectId, other_tip: &ObjectId) -> anyhow::Result<SplitPoint> {
        let current_ancestry = self.last_parent_chain(current_tip)?;
        debug_log!(
            "current ancestry ({} commits): {:?}",
            current_ancestry.len(),
            current_ancestry
        );

        if current_ancestry.contains(other_tip) {
            debug_log!("other tip {} is an ancestor of current", other_tip);
            return Ok(SplitPoint::AncestorOfCurrent);
        }

        let mut cursor = Some(other_tip.clone());
        while let Some(oid) = cursor {
            if current_ancestry.contains(&oid) {
                debug_log!("split point: {}", oid);
                return Ok(SplitPoint::Commit(oid));
            }
            cursor = (self.parents_loader)(&oid)?.first().cloned();
        }

        // Both chains end at the root commit of the same repository, so the
        // walk can only fall through on a corrupt store.
        anyhow::bail!(
            "no common ancestor between {} and {}",
            current_tip,
            other_tip
        )
    }

    /// Ordered ancestor sequence of `tip`, following the last parent link at
    /// every step, tip first, root last.
    fn last_parent_chain(&self, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = vec![tip.clone()];
        let mut cursor = tip.clone();

        while let Some(parent) = (self.parents_loader)(&cursor)?.last().cloned() {
            chain.push(parent.clone());
            cursor = parent;
        }

        Ok(chain)
    }
}
