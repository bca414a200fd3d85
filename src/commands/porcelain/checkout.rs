use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::UserError;

impl Repository {
    /// Restore one file from the head snapshot into the working directory.
    pub fn checkout_file(&mut self, path: &str) -> anyhow::Result<()> {
        let head = self.head_commit()?;

        self.restore_file_from(&head, path)
    }

    /// Restore one file from an arbitrary commit, addressed by full id or
    /// unique prefix.
    pub fn checkout_file_from_commit(&mut self, id_prefix: &str, path: &str) -> anyhow::Result<()> {
        let commit = self.resolve_commit(id_prefix)?;

        self.restore_file_from(&commit, path)
    }

    /// Switch to another branch, replacing the working directory with its
    /// tip snapshot.
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let tip = self
            .state()
            .branch_tip(name)
            .ok_or(UserError::UnknownBranch)?
            .clone();
        if name == self.state().current_branch() {
            anyhow::bail!(UserError::AlreadyOnBranch);
        }

        let target = self.database().load(&tip)?;
        self.replace_working_tree(&target)?;

        self.state_mut().switch_branch(name, tip);
        self.state_mut().staging.clear();
        self.staging_store().clear()?;

        self.persist()
    }

    fn restore_file_from(&self, commit: &Commit, path: &str) -> anyhow::Result<()> {
        let blob = commit.blob(path).ok_or(UserError::FileNotInCommit)?;

        self.workspace().write_file(path, blob.content())
    }

    /// Replace the whole working directory with a target snapshot.
    ///
    /// The untracked-file safety check runs over the complete file set
    /// before the first destructive write, so a conflict anywhere aborts the
    /// operation with the working directory untouched.
    pub(crate) fn replace_working_tree(&self, target: &Commit) -> anyhow::Result<()> {
        let head = self.head_commit()?;
        let working_files = self.workspace().list_plain_files()?;

        for file in &working_files {
            if !head.tracks(file) && target.tracks(file) {
                anyhow::bail!(UserError::UntrackedFileConflict);
            }
        }

        for file in &working_files {
            if !target.tracks(file) {
                self.workspace().remove_file(file)?;
            }
        }
        for (path, blob) in target.snapshot() {
            self.workspace().write_file(path, blob.content())?;
        }

        Ok(())
    }
}
