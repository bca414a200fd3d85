use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::UserError;

impl Repository {
    /// Create a new branch pointing at the current head.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name)?;

        if self.state().branch_tip(name.as_ref()).is_some() {
            anyhow::bail!(UserError::BranchExists);
        }

        let head = self.state().head().clone();
        self.state_mut()
            .branches
            .insert(name.as_ref().to_string(), head);

        self.persist()
    }

    /// Delete a branch pointer. The commits it pointed to stay in the store.
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        if name == self.state().current_branch() {
            anyhow::bail!(UserError::CannotRemoveCurrentBranch);
        }
        if self.state_mut().branches.remove(name).is_none() {
            anyhow::bail!(UserError::MissingBranch);
        }

        self.persist()
    }
}
