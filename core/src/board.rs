use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable minesweeper board: mine markers plus the adjacency count of every other cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board for `config`, asking `placer` where the mines go.
    pub fn build(config: GameConfig, mut placer: impl MinePlacer) -> Result<Self> {
        let mines = placer.place(&config)?;
        let mut cells: Array2<Cell> = Array2::default(config.size.to_nd_index());

        for &coords in &mines {
            cells[coords.to_nd_index()] = Cell::Mine;
            for pos in cells.iter_neighbors(coords) {
                if let Cell::Count(count) = &mut cells[pos.to_nd_index()] {
                    *count += 1;
                }
            }
        }

        log::debug!(
            "Built {}x{} board with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );
        Ok(Self {
            cells,
            mine_count: config.mines,
        })
    }

    /// Builds a board with mines at exactly `mine_coords`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mines = u32::try_from(mine_coords.len()).unwrap_or(u32::MAX);
        let config = GameConfig::new(size.0.into(), size.1.into(), mines)?;
        Self::build(config, FixedMinePlacer::new(mine_coords))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions come from a `Coord2` in `build`
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(self.out_of_bounds((coords.0.into(), coords.1.into())))
        }
    }

    /// Bounds check for raw player input, which may be negative or larger than any board.
    pub fn checked_coords(&self, raw: (i64, i64)) -> Result<Coord2> {
        checked_coords(raw, self.size()).ok_or_else(|| self.out_of_bounds(raw))
    }

    fn out_of_bounds(&self, (row, col): (i64, i64)) -> GameError {
        let (rows, cols) = self.size();
        GameError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All cells in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn as_array(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// How the cell at `coords` looks to the player given `mask`.
    pub fn view(&self, mask: &RevealedMask, coords: Coord2) -> CellView {
        if !mask.is_revealed(coords) {
            return CellView::Hidden;
        }
        match self[coords] {
            Cell::Mine => CellView::Mine,
            Cell::Count(0) => CellView::Empty,
            Cell::Count(count) => CellView::Count(count),
        }
    }
}

impl core::ops::Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Which cells the player has uncovered. Cells only ever go from hidden to revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedMask {
    revealed: Array2<bool>,
    revealed_count: CellCount,
}

impl RevealedMask {
    /// Mask for a fresh game, nothing revealed.
    pub fn new(size: Coord2) -> Self {
        Self {
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: 0,
        }
    }

    /// Mask with every cell revealed, used to show the whole board.
    pub fn full(size: Coord2) -> Self {
        Self {
            revealed: Array2::from_elem(size.to_nd_index(), true),
            revealed_count: mult(size.0, size.1),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.revealed.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn as_array(&self) -> &Array2<bool> {
        &self.revealed
    }

    /// Returns `true` if the cell was hidden before.
    pub(crate) fn mark(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.revealed[coords.to_nd_index()];
        if *cell {
            false
        } else {
            *cell = true;
            self.revealed_count += 1;
            true
        }
    }
}

/// Builds a `rows` x `cols` board with `mines` randomly placed mines drawn from `rng`.
pub fn build_board<R: rand::Rng>(rows: u32, cols: u32, mines: u32, rng: R) -> Result<Board> {
    let config = GameConfig::new(rows, cols, mines)?;
    Board::build(config, RandomMinePlacer::new(rng))
}
