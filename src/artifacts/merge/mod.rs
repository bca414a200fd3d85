//! Merge algorithms
//!
//! - `split_point`: common ancestor discovery between two branch tips
//! - `resolution`: the per-file three-way decision table and conflict
//!   marker synthesis

pub mod resolution;
pub mod split_point;
