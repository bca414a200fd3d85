//! grit, a small single-user version-control engine
//!
//! A content-addressed commit store layered with a branch table, a staging
//! area and a three-way merge. The crate is organized into:
//!
//! - `areas`: the durable repository surfaces (workspace, database, staging,
//!   repository state)
//! - `artifacts`: value types and algorithms (objects, branch names, merge)
//! - `commands`: the user-facing porcelain operations
//! - `errors`: the user-facing failure taxonomy

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
