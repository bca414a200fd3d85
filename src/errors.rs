//! User-facing failure taxonomy
//!
//! Every recoverable failure a command can report to the user is a variant
//! here, with the exact one-line message printed to stdout. Internal faults
//! (unreadable files, corrupt objects) stay plain `anyhow` errors and are not
//! part of this taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("A grit version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized grit directory.")]
    NotInitialized,

    /// Reported by `add` when the named file is absent from the workspace.
    #[error("File does not exist.")]
    MissingSourceFile,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    /// Reported when a commit id (or id prefix) resolves to no unique commit.
    #[error("No commit with that id exists.")]
    NoSuchCommit,

    /// Reported by `checkout` of a branch.
    #[error("No such branch exists.")]
    UnknownBranch,

    /// Reported by `rm-branch` and `merge`.
    #[error("A branch with that name does not exist.")]
    MissingBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,

    #[error("Invalid branch name: {0}.")]
    InvalidBranchName(String),

    #[error("Found no commit with that message.")]
    NoCommitFound,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    #[error("Given branch is an ancestor of the current branch.")]
    AncestorBranch,
}
