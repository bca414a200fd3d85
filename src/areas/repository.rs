//! Repository state and lifecycle
//!
//! All durable repository state outside the commit store lives in one
//! serialized slot: the branch table, the current branch, the head reference
//! and the staging maps. Every command runs against a freshly loaded copy of
//! that state and persists the complete updated state at its end; there is
//! no partial visibility between commands.
//!
//! Branches and head hold commit ids, never embedded commits; commits are
//! resolved through the database on demand.

use crate::areas::database::Database;
use crate::areas::staging::{StagingArea, StagingStore};
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::UserError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::Path;

pub const CONTROL_DIR: &str = ".grit";
pub const DEFAULT_BRANCH: &str = "main";

const STATE_SLOT: &str = "repository";
const COMMITS_DIR: &str = "commits";
const STAGING_DIR: &str = "staging";

/// The durable repository-state slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryState {
    pub(crate) branches: BTreeMap<String, ObjectId>,
    pub(crate) current_branch: String,
    pub(crate) head: ObjectId,
    pub(crate) staging: StagingArea,
}

impl RepositoryState {
    fn initial(root_commit: &Commit) -> Self {
        RepositoryState {
            branches: BTreeMap::from([(DEFAULT_BRANCH.to_string(), root_commit.id().clone())]),
            current_branch: DEFAULT_BRANCH.to_string(),
            head: root_commit.id().clone(),
            staging: StagingArea::default(),
        }
    }

    pub fn head(&self) -> &ObjectId {
        &self.head
    }

    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    pub fn branch_tip(&self, name: &str) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    pub fn staging(&self) -> &StagingArea {
        &self.staging
    }

    /// Move the current branch (and head with it) to a new tip.
    pub(crate) fn advance_head(&mut self, oid: ObjectId) {
        self.branches
            .insert(self.current_branch.clone(), oid.clone());
        self.head = oid;
    }

    /// Make another branch current, pointing head at its tip.
    pub(crate) fn switch_branch(&mut self, name: &str, tip: ObjectId) {
        self.current_branch = name.to_string();
        self.head = tip;
    }
}

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    database: Database,
    staging_store: StagingStore,
    state: RepositoryState,
}

impl Repository {
    /// Initialize a fresh repository at `path`: control directories, the
    /// deterministic root commit and the default branch pointing at it.
    pub fn init(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let control_path = path.join(CONTROL_DIR);

        if control_path.exists() {
            anyhow::bail!(UserError::AlreadyInitialized);
        }

        std::fs::create_dir_all(control_path.join(COMMITS_DIR))
            .context("failed to create commits directory")?;
        std::fs::create_dir_all(control_path.join(STAGING_DIR))
            .context("failed to create staging directory")?;

        let root_commit = Commit::initial();
        let state = RepositoryState::initial(&root_commit);
        let repository = Self::assemble(path, writer, state);

        repository.database.store(&root_commit)?;
        repository.persist()?;

        Ok(repository)
    }

    /// Load an existing repository's state from its durable slot.
    pub fn load(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let state_path = path.join(CONTROL_DIR).join(STATE_SLOT);

        if !state_path.exists() {
            anyhow::bail!(UserError::NotInitialized);
        }

        let state_content = std::fs::read(&state_path)
            .with_context(|| format!("unable to read repository state {}", state_path.display()))?;
        let state = serde_json::from_slice(&state_content)
            .with_context(|| format!("corrupt repository state {}", state_path.display()))?;

        Ok(Self::assemble(path, writer, state))
    }

    fn assemble(
        path: std::path::PathBuf,
        writer: Box<dyn std::io::Write>,
        state: RepositoryState,
    ) -> Self {
        let control_path = path.join(CONTROL_DIR);
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let database = Database::new(control_path.join(COMMITS_DIR).into_boxed_path());
        let staging_store = StagingStore::new(control_path.join(STAGING_DIR).into_boxed_path());

        Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            database,
            staging_store,
            state,
        }
    }

    /// Write the complete repository state back to the durable slot.
    pub fn persist(&self) -> anyhow::Result<()> {
        let state_path = self.path.join(CONTROL_DIR).join(STATE_SLOT);
        let state_content =
            serde_json::to_vec(&self.state).context("unable to serialize repository state")?;

        std::fs::write(&state_path, state_content).with_context(|| {
            format!("unable to write repository state {}", state_path.display())
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn staging_store(&self) -> &StagingStore {
        &self.staging_store
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    /// The commit currently checked out.
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.database.load(&self.state.head)
    }

    /// Resolve a full id or unique prefix to a stored commit.
    pub fn resolve_commit(&self, id_prefix: &str) -> anyhow::Result<Commit> {
        let oid = self
            .database
            .resolve_prefix(id_prefix)?
            .ok_or(UserError::NoSuchCommit)?;

        self.database.load(&oid)
    }
}
