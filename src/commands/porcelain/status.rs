use crate::areas::repository::Repository;
use colored::Colorize;

impl Repository {
    /// Print branch names (current first-starred), staged paths and pending
    /// removals, each section sorted by name.
    pub fn status(&self) -> anyhow::Result<()> {
        writeln!(self.writer(), "=== Branches ===")?;
        for name in self.state().branches.keys() {
            if name == self.state().current_branch() {
                writeln!(self.writer(), "{}", format!("*{name}").green())?;
            } else {
                writeln!(self.writer(), "{name}")?;
            }
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Staged Files ===")?;
        for path in self.state().staging.staged_paths() {
            writeln!(self.writer(), "{path}")?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Removed Files ===")?;
        for path in self.state().staging.removed_paths() {
            writeln!(self.writer(), "{path}")?;
        }
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Modifications Not Staged For Commit ===")?;
        writeln!(self.writer())?;

        writeln!(self.writer(), "=== Untracked Files ===")?;
        writeln!(self.writer())?;

        Ok(())
    }
}
