// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count cooling-duct routes through a datacenter.
//!
//! A datacenter is a grid of rooms. A single duct must start at the air
//! intake, end at the air conditioner, pass through every room we own
//! exactly once, and move only horizontally or vertically. This crate counts
//! how many such ducts exist: the Hamiltonian paths between two fixed cells
//! of a grid graph.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Grid (Immutable)
//!
//! Built once from input and never changed during search:
//! - Cell states (open / blocked / start / end)
//! - Start and end positions, and the number of open cells
//! - Adjacency queries, with no wraparound across rows
//!
//! ## Tier 2: Search State (Mutable)
//!
//! Owned by one [`SearchContext`] and restored on backtracking:
//! - VisitedSet - which cells are walls or already on the duct
//! - Trail - records marks for LIFO undo
//! - Statistics - node, path and prune counters
//!
//! # Search Algorithm
//!
//! Depth-first search from START, extending the duct in UP, RIGHT, DOWN,
//! LEFT order. Before expanding a node the [`pruning`] heuristics look for
//! structural impossibilities (a free cell that could be entered but never
//! left, or free cells cut off from the duct) and abandon the branch.
//!
//! The worst case remains exponential; the heuristics shrink the tree on
//! typical inputs without changing the count.
//!
//! # Example
//!
//! ```
//! use duct_search::{count_paths, Grid};
//!
//! let grid: Grid = "4 3\n2 0 0 0\n0 0 0 0\n0 0 3 1\n".parse().unwrap();
//! assert_eq!(count_paths(&grid), 2);
//! ```

pub mod context;
pub mod engine;
pub mod grid;
pub mod pruning;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{count_paths, PathSearch, SearchOptions, Strategy};
pub use grid::{Grid, GridError};
pub use pruning::Heuristics;
pub use trail::Trail;
