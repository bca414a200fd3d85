use crate::areas::repository::Repository;
use crate::artifacts::merge::resolution::{self, Resolution};
use crate::artifacts::merge::split_point::{SplitPoint, SplitPointFinder};
use crate::artifacts::objects::blob::Blob;
use crate::errors::UserError;

impl Repository {
    /// Merge another branch into the current one.
    ///
    /// Either fast-forwards the current branch, or resolves every path of
    /// the union of the split/current/other snapshots through the three-way
    /// decision table and commits the result as a two-parent merge commit.
    /// Conflicting paths are written back with conflict markers and staged
    /// as-is; they flag the merge but do not fail it.
    pub fn merge(&mut self, other_branch: &str) -> anyhow::Result<()> {
        if !self.state().staging.is_empty() {
            anyhow::bail!(UserError::UncommittedChanges);
        }
        let other_tip = self
            .state()
            .branch_tip(other_branch)
            .ok_or(UserError::MissingBranch)?
            .clone();
        if other_branch == self.state().current_branch() {
            anyhow::bail!(UserError::SelfMerge);
        }

        let current_head = self.head_commit()?;
        let other_head = self.database().load(&other_tip)?;

        // safety check before anything is written: an untracked working
        // file that the incoming branch tracks would be silently clobbered
        for file in self.workspace().list_plain_files()? {
            if !current_head.tracks(&file) && other_head.tracks(&file) {
                anyhow::bail!(UserError::UntrackedFileConflict);
            }
        }

        let split_oid = {
            let finder = SplitPointFinder::new(|oid| {
                self.database()
                    .load(oid)
                    .map(|commit| commit.parents().to_vec())
            });

            match finder.find(current_head.id(), &other_tip)? {
                SplitPoint::AncestorOfCurrent => anyhow::bail!(UserError::AncestorBranch),
                SplitPoint::Commit(oid) => oid,
            }
        };

        if &split_oid == current_head.id() {
            self.checkout_branch(other_branch)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(());
        }

        let split = self.database().load(&split_oid)?;

        // paths known to the split point first, then paths new in the other
        // branch; paths only the current branch knows are kept untouched
        for (path, split_blob) in split.snapshot() {
            let decision = resolution::resolve(
                Some(split_blob),
                current_head.blob(path),
                other_head.blob(path),
            );
            self.apply_resolution(path, decision)?;
        }
        for (path, other_blob) in other_head.snapshot() {
            if split.tracks(path) {
                continue;
            }
            let decision = resolution::resolve(None, current_head.blob(path), Some(other_blob));
            self.apply_resolution(path, decision)?;
        }

        let message = format!(
            "Merged {} into {}.",
            other_branch,
            self.state().current_branch()
        );
        let merge_oid = self.commit(&message)?;

        // second phase of merge-commit construction: attach the merged-in
        // tip as second parent and re-store under the unchanged id
        let mut merge_commit = self.database().load(&merge_oid)?;
        merge_commit.attach_merge_parent(other_tip);
        self.database().store(&merge_commit)?;

        Ok(())
    }

    fn apply_resolution(&mut self, path: &str, decision: Resolution) -> anyhow::Result<()> {
        match decision {
            Resolution::Keep => Ok(()),
            Resolution::TakeOther(blob) => {
                self.workspace().write_file(path, blob.content())?;
                self.stage_merged_blob(blob)
            }
            Resolution::Remove => {
                self.state_mut().staging.mark_removed(path);
                self.workspace().remove_file(path)
            }
            Resolution::Conflict { current, other } => {
                let content = resolution::conflict_content(current.as_ref(), other.as_ref());
                self.workspace().write_file(path, &content)?;
                writeln!(self.writer(), "Encountered a merge conflict.")?;
                self.stage_merged_blob(Blob::new(path, content))
            }
        }
    }

    fn stage_merged_blob(&mut self, blob: Blob) -> anyhow::Result<()> {
        self.staging_store().write_entry(blob.path(), blob.content())?;
        self.state_mut().staging.stage(blob);

        Ok(())
    }
}
