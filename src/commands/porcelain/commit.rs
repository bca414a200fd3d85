use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::UserError;

impl Repository {
    /// Flush the staging area into a new commit and advance the current
    /// branch to it.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.is_empty() {
            anyhow::bail!(UserError::EmptyCommitMessage);
        }
        if self.state().staging.is_empty() {
            anyhow::bail!(UserError::NothingToCommit);
        }

        let head = self.head_commit()?;
        let snapshot = self.state().staging.flush_to_snapshot(head.snapshot());
        let commit = Commit::new(
            message.to_string(),
            vec![head.id().clone()],
            snapshot,
        );

        self.database().store(&commit)?;

        let oid = commit.id().clone();
        self.state_mut().advance_head(oid.clone());
        self.state_mut().staging.clear();
        self.staging_store().clear()?;

        self.persist()?;

        Ok(oid)
    }
}
