use crate::areas::repository::Repository;
use crate::errors::UserError;

impl Repository {
    /// Print the id of every commit whose message equals the query exactly.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut found = false;

        for oid in self.database().list_ids()? {
            let commit = self.database().load(&oid)?;
            if commit.message() == message {
                found = true;
                writeln!(self.writer(), "{}", oid)?;
            }
        }

        if !found {
            anyhow::bail!(UserError::NoCommitFound);
        }

        Ok(())
    }
}
