use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 3] = [".grit", ".", ".."];

/// Working directory collaborator.
///
/// Tracked files live as plain names at the top level of the repository
/// directory; the control directory is never listed.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the plain files at the top level of the workspace, sorted.
    pub fn list_plain_files(&self) -> anyhow::Result<Vec<String>> {
        let mut names = WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                if IGNORED_PATHS.contains(&name.as_str()) {
                    None
                } else {
                    Some(name)
                }
            })
            .collect::<Vec<_>>();
        names.sort();

        Ok(names)
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<String> {
        let file_path = self.path.join(name);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("unable to read workspace file {}", file_path.display()))
    }

    pub fn write_file(&self, name: &str, content: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        std::fs::write(&file_path, content)
            .with_context(|| format!("unable to write workspace file {}", file_path.display()))
    }

    /// Delete a working file if present; deleting an absent file is a no-op.
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if file_path.exists() {
            std::fs::remove_file(&file_path).with_context(|| {
                format!("unable to remove workspace file {}", file_path.display())
            })?;
        }

        Ok(())
    }
}
