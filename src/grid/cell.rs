// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell states of the datacenter grid.
//!
//! The input encodes each room as a small integer:
//! - `0`: a room we own, which the duct must pass through
//! - `1`: a room we do not own, which the duct may never enter
//! - `2`: the air intake, where the duct starts
//! - `3`: the air conditioner, where the duct ends

use std::fmt;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Open,
    Blocked,
    Start,
    End,
}

impl CellState {
    /// True for every cell the duct must visit (OPEN, START and END).
    pub fn is_open(self) -> bool {
        !matches!(self, CellState::Blocked)
    }

    /// The input code for this state.
    pub fn code(self) -> u8 {
        match self {
            CellState::Open => 0,
            CellState::Blocked => 1,
            CellState::Start => 2,
            CellState::End => 3,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Open),
            1 => Ok(CellState::Blocked),
            2 => Ok(CellState::Start),
            3 => Ok(CellState::End),
            other => Err(other),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
