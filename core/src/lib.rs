//! Board engine for terminal minesweeper: mine placement, board building, flood-fill reveal and win detection.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated board dimensions and mine count for one game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks the board has at least one cell on each axis, fits in [`Coord`], and leaves at least one safe cell next
    /// to at least one mine.
    pub fn new(rows: u32, cols: u32, mines: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard.into());
        }

        let (Ok(row_count), Ok(col_count)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(ConfigError::TooLarge { rows, cols }.into());
        };

        let config = Self::new_unchecked(
            (row_count, col_count),
            CellCount::try_from(mines).unwrap_or(CellCount::MAX),
        );
        config.validate_mine_count()?;
        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub(crate) fn validate_mine_count(&self) -> Result<()> {
        let cells = self.total_cells();
        if self.mines == 0 || self.mines >= cells {
            Err(ConfigError::MineCount {
                mines: self.mines,
                cells,
            }
            .into())
        } else {
            Ok(())
        }
    }
}
