use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::errors::UserError;

impl Repository {
    /// Stage one working file for the next commit.
    ///
    /// Re-adding a file whose content already matches the head snapshot is
    /// not a change: any stale pending entry for the path is discarded along
    /// with its on-disk staged copy. Re-adding an identically staged file is
    /// a no-op.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        if !self.workspace().file_exists(path) {
            anyhow::bail!(UserError::MissingSourceFile);
        }

        let content = self.workspace().read_file(path)?;
        let blob = Blob::new(path, content);

        self.state_mut().staging.unmark_removed(path);

        let head = self.head_commit()?;
        if head.blob(path) == Some(&blob) {
            if self.state_mut().staging.unstage(path).is_some() {
                self.staging_store().remove_entry(path)?;
            }
            return self.persist();
        }

        if self.state().staging.blob(path) == Some(&blob) {
            return self.persist();
        }

        self.staging_store().write_entry(path, blob.content())?;
        self.state_mut().staging.stage(blob);

        self.persist()
    }
}
