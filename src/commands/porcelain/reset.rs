use crate::areas::repository::Repository;

impl Repository {
    /// Move the current branch (and head) to an arbitrary commit, replacing
    /// the working directory with its snapshot.
    pub fn reset(&mut self, id_prefix: &str) -> anyhow::Result<()> {
        let target = self.resolve_commit(id_prefix)?;

        self.replace_working_tree(&target)?;

        self.state_mut().advance_head(target.id().clone());
        self.state_mut().staging.clear();
        self.staging_store().clear()?;

        self.persist()
    }
}
