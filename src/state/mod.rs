// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - VisitedSet: which cells are currently on the duct
//! - Statistics: counters collected during one search
//!
//! All visitation changes made during search go through the trail so they
//! can be undone on backtrack.

pub mod statistics;
pub mod visited;

pub use statistics::{Counters, Statistics};
pub use visited::VisitedSet;
