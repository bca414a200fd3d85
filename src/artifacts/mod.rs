//! Value types and algorithms
//!
//! - `branch`: branch name validation
//! - `core`: shared utilities (pager wrapper)
//! - `merge`: split point discovery and the three-way decision table
//! - `objects`: blob and commit value types plus object ids

pub mod branch;
pub mod core;
pub mod merge;
pub mod objects;
