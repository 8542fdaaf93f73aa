// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid construction and parsing.

use thiserror::Error;

/// Errors that make a grid unusable for the search.
///
/// The search itself assumes a well-formed grid; every check on the input
/// happens here, before a [`Grid`](super::Grid) exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("input is empty")]
    Empty,

    #[error("missing grid {0}")]
    MissingDimension(&'static str),

    #[error("invalid token {token:?}: expected a non-negative integer")]
    InvalidToken { token: String },

    #[error("cell {index} has invalid code {value} (expected 0, 1, 2 or 3)")]
    InvalidCell { index: usize, value: u64 },

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} cells is too large to address")]
    DimensionOverflow { width: usize, height: usize },

    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("grid has no start cell (2)")]
    MissingStart,

    #[error("grid has no end cell (3)")]
    MissingEnd,

    #[error("grid has more than one start cell (at {first} and {second})")]
    DuplicateStart { first: usize, second: usize },

    #[error("grid has more than one end cell (at {first} and {second})")]
    DuplicateEnd { first: usize, second: usize },
}
