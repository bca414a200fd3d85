//! Per-file three-way merge decisions
//!
//! Every path in the union of the split/current/other snapshots is resolved
//! independently by comparing the three blob versions. The decision is a
//! pure function so the full table is unit-testable without a repository.
//!
//! Conflicts do not fail the merge: the conflicting versions are spliced
//! into the working file between literal markers and the marked-up content
//! is staged as the path's merged version.

use crate::artifacts::objects::blob::Blob;

/// What the merge engine should do with one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the current version (or absence) in place.
    Keep,
    /// Write the other side's version to the workspace and stage it.
    TakeOther(Blob),
    /// Stage the path's removal and delete the working file.
    Remove,
    /// Both sides changed the path incompatibly; synthesize markers.
    Conflict {
        current: Option<Blob>,
        other: Option<Blob>,
    },
}

/// Resolve one path given the blob tracked at the split point, at the
/// current tip and at the other tip (`None` where the path is absent).
pub fn resolve(split: Option<&Blob>, current: Option<&Blob>, other: Option<&Blob>) -> Resolution {
    match (split, current, other) {
        // Present everywhere: whichever single side diverged wins.
        (Some(split), Some(current), Some(other)) => {
            if current == other {
                Resolution::Keep
            } else if current == split {
                Resolution::TakeOther(other.clone())
            } else if other == split {
                Resolution::Keep
            } else {
                Resolution::Conflict {
                    current: Some(current.clone()),
                    other: Some(other.clone()),
                }
            }
        }

        // Other side deleted the path.
        (Some(split), Some(current), None) => {
            if current == split {
                Resolution::Remove
            } else {
                Resolution::Conflict {
                    current: Some(current.clone()),
                    other: None,
                }
            }
        }

        // Current side already deleted the path.
        (Some(split), None, Some(other)) => {
            if other == split {
                Resolution::Keep
            } else {
                Resolution::Conflict {
                    current: None,
                    other: Some(other.clone()),
                }
            }
        }

        // Deleted on both sides.
        (Some(_), None, None) => Resolution::Keep,

        // New in the other branch since the split.
        (None, current, Some(other)) => match current {
            Some(current) if current == other => Resolution::Keep,
            Some(current) => Resolution::Conflict {
                current: Some(current.clone()),
                other: Some(other.clone()),
            },
            None => Resolution::TakeOther(other.clone()),
        },

        // Only the current branch knows the path.
        (None, _, None) => Resolution::Keep,
    }
}

/// The literal working-file content representing a conflict.
///
/// The side contents are spliced in verbatim; a version that does not end in
/// a newline runs straight into the following marker, exactly as recorded.
pub fn conflict_content(current: Option<&Blob>, other: Option<&Blob>) -> String {
    let current_content = current.map(Blob::content).unwrap_or_default();
    let other_content = other.map(Blob::content).unwrap_or_default();

    format!("<<<<<<< HEAD\n{current_content}=======\n{other_content}>>>>>>>\n")
}
