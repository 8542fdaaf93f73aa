// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linear cell positions.

use std::fmt;

/// A cell position as a row-major linear index into the grid.
///
/// This is a newtype wrapper to prevent mixing positions with lengths,
/// counts and other integer values during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the position as a usize (for array indexing).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
