use crate::areas::repository::Repository;
use crate::errors::UserError;

impl Repository {
    /// Unstage a pending file, or mark a tracked file for removal in the
    /// next commit and delete it from the working directory.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        let is_staged = self.state().staging.is_staged(path);
        let is_tracked = self.head_commit()?.tracks(path);

        if !is_staged && !is_tracked {
            anyhow::bail!(UserError::NothingToRemove);
        }

        if is_staged {
            self.state_mut().staging.unstage(path);
            self.staging_store().remove_entry(path)?;
        }

        if is_tracked {
            self.state_mut().staging.mark_removed(path);
            self.workspace().remove_file(path)?;
        }

        self.persist()
    }
}
