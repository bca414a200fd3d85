use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;

impl Repository {
    /// Walk the current head's history along first-parent links, printing
    /// one block per commit.
    pub fn log(&self) -> anyhow::Result<()> {
        let mut cursor = Some(self.head_commit()?);

        while let Some(commit) = cursor {
            self.display_commit(&commit)?;

            cursor = match commit.first_parent() {
                Some(parent) => Some(self.database().load(parent)?),
                None => None,
            };
        }

        Ok(())
    }

    /// Print every commit in the store, in storage order.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for oid in self.database().list_ids()? {
            let commit = self.database().load(&oid)?;
            self.display_commit(&commit)?;
        }

        Ok(())
    }

    fn display_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.id()).yellow()
        )?;
        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
