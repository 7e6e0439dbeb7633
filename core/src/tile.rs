use serde::{Deserialize, Serialize};

/// Content of a board cell, fixed once the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Number of mines among the Moore neighbors.
    Count(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-visible reading of a cell, combining the board with the revealed mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    /// Revealed cell with no adjacent mines.
    Empty,
    Mine,
    Count(u8),
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
