use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),
    #[error("The cell({row}:{col}) is already revealed.")]
    AlreadyRevealed { row: Coord, col: Coord },
    #[error("The cell({row}:{col}) is outside of the {rows}x{cols} board.")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: Coord,
        cols: Coord,
    },
    #[error("Revealed mask shape does not match the board")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the session can continue after this error, i.e. the player only needs to pick another move.
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::AlreadyRevealed { .. } | Self::OutOfBounds { .. })
    }
}

/// Reasons a board cannot be built.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board should have at least one row and one column")]
    EmptyBoard,
    #[error("The number of mines must be between 1 and {} for a board with {cells} cells, got {mines}", .cells.saturating_sub(1))]
    MineCount { mines: CellCount, cells: CellCount },
    #[error("Board dimensions {rows}x{cols} are too large")]
    TooLarge { rows: u32, cols: u32 },
    #[error("Mine placement does not match the board: {0}")]
    Placement(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
