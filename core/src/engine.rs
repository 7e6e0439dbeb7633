use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Result of a single successful reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Safe,
    Mine,
}

impl RevealOutcome {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Reveals the cell at `coords`, flood-filling from it when it has no adjacent mines.
///
/// Fails without touching `mask` when the cell is out of bounds or already revealed. Revealing a zero cell uncovers
/// its whole connected zero region plus the numbered cells bordering it; mines are never uncovered by the flood.
pub fn reveal(board: &Board, mask: &mut RevealedMask, coords: Coord2) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    if mask.size() != board.size() {
        return Err(GameError::InvalidBoardShape);
    }
    if mask.is_revealed(coords) {
        let (row, col) = coords;
        return Err(GameError::AlreadyRevealed { row, col });
    }

    mask.mark(coords);
    let count = match board[coords] {
        Cell::Mine => {
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(RevealOutcome::Mine);
        }
        Cell::Count(count) => count,
    };
    log::debug!("Reveal cell at {:?}, mine count: {}", coords, count);

    if count == 0 {
        flood_fill(board, mask, coords);
    }

    Ok(RevealOutcome::Safe)
}

/// Expands from the zero cell at `start`, which must already be marked.
fn flood_fill(board: &Board, mask: &mut RevealedMask, start: Coord2) {
    let mut to_visit: VecDeque<_> = board
        .iter_neighbors(start)
        .filter(|&pos| !mask.is_revealed(pos))
        .collect();
    log::trace!(
        "Starting flood-fill from {:?}, initial neighbors: {:?}",
        start,
        to_visit
    );

    while let Some(visit_coords) = to_visit.pop_front() {
        // the same cell may be queued by several zero neighbors before it is visited
        if mask.is_revealed(visit_coords) {
            continue;
        }

        let Cell::Count(visit_count) = board[visit_coords] else {
            log::trace!("Skipping mine at {:?}", visit_coords);
            continue;
        };

        mask.mark(visit_coords);
        log::trace!(
            "Flood revealed cell at {:?}, mine count: {}",
            visit_coords,
            visit_count
        );

        // numbered cells bound the region
        if visit_count == 0 {
            to_visit.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| !mask.is_revealed(pos)),
            );
        }
    }
}

/// Whether every cell without a mine has been revealed. Revealed mines do not matter.
pub fn is_won(board: &Board, mask: &RevealedMask) -> bool {
    board
        .enumerate()
        .all(|(coords, cell)| cell.is_mine() || mask.is_revealed(coords))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of a move played through [`PlayEngine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Safe cell revealed, game continues.
    Cleared,
    HitMine,
    Won,
}

impl MoveOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

/// Owns the board and revealed mask of one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    mask: RevealedMask,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let mask = RevealedMask::new(board.size());
        Self {
            board,
            mask,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mask(&self) -> &RevealedMask {
        &self.mask
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn view(&self, coords: Coord2) -> CellView {
        self.board.view(&self.mask, coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<MoveOutcome> {
        self.check_not_finished()?;

        let outcome = match reveal(&self.board, &mut self.mask, coords)? {
            RevealOutcome::Mine => {
                self.triggered_mine = Some(coords);
                self.state = EngineState::Lost;
                MoveOutcome::HitMine
            }
            RevealOutcome::Safe if is_won(&self.board, &self.mask) => {
                self.state = EngineState::Won;
                MoveOutcome::Won
            }
            RevealOutcome::Safe => {
                self.state = EngineState::Active;
                MoveOutcome::Cleared
            }
        };
        log::debug!("Move at {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Same as [`Self::reveal`] for unchecked player input.
    pub fn reveal_raw(&mut self, raw: (i64, i64)) -> Result<MoveOutcome> {
        let coords = self.board.checked_coords(raw)?;
        self.reveal(coords)
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    const T: bool = true;
    const F: bool = false;

    fn sample_board() -> Board {
        Board::from_mine_coords((3, 3), &[(2, 2)]).unwrap()
    }

    #[test]
    fn reveal_zero_floods_region_and_border() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());

        assert_eq!(reveal(&board, &mut mask, (0, 0)), Ok(RevealOutcome::Safe));
        assert_eq!(mask.as_array(), &array![[T, T, T], [T, T, T], [T, T, F]]);
        assert!(is_won(&board, &mask));
    }

    #[test]
    fn reveal_mine_marks_only_that_cell() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());

        assert_eq!(reveal(&board, &mut mask, (2, 2)), Ok(RevealOutcome::Mine));
        assert_eq!(mask.as_array(), &array![[F, F, F], [F, F, F], [F, F, T]]);
        assert!(!is_won(&board, &mask));
    }

    #[test]
    fn reveal_numbered_cell_does_not_expand() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());

        assert_eq!(reveal(&board, &mut mask, (1, 1)), Ok(RevealOutcome::Safe));
        assert_eq!(mask.revealed_count(), 1);
    }

    #[test]
    fn reveal_twice_reports_coordinate() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());
        reveal(&board, &mut mask, (0, 0)).unwrap();
        let before = mask.clone();

        let err = reveal(&board, &mut mask, (0, 0)).unwrap_err();

        assert_eq!(err, GameError::AlreadyRevealed { row: 0, col: 0 });
        assert_eq!(err.to_string(), "The cell(0:0) is already revealed.");
        assert_eq!(mask, before);
    }

    #[test]
    fn reveal_out_of_bounds_leaves_mask_untouched() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());

        assert!(matches!(
            reveal(&board, &mut mask, (3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0, .. })
        ));
        assert_eq!(mask.revealed_count(), 0);
    }

    #[test]
    fn reveal_rejects_mask_of_another_board() {
        let board = sample_board();
        let mut mask = RevealedMask::new((2, 2));

        assert_eq!(
            reveal(&board, &mut mask, (0, 0)),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(mask.revealed_count(), 0);
    }

    #[test]
    fn flood_stops_at_numbers_and_keeps_mines_hidden() {
        // wall of mines in the middle column splits the board
        let board = Board::from_mine_coords((3, 5), &[(0, 2), (1, 2), (2, 2)]).unwrap();
        let mut mask = RevealedMask::new(board.size());

        reveal(&board, &mut mask, (1, 0)).unwrap();

        assert_eq!(
            mask.as_array(),
            &array![[T, T, F, F, F], [T, T, F, F, F], [T, T, F, F, F]]
        );
    }

    #[test]
    fn flood_skips_already_revealed_border() {
        let board = sample_board();
        let mut mask = RevealedMask::new(board.size());

        reveal(&board, &mut mask, (1, 2)).unwrap();
        reveal(&board, &mut mask, (0, 0)).unwrap();

        assert_eq!(mask.revealed_count(), 8);
    }

    #[test]
    fn won_ignores_revealed_mines() {
        let board = sample_board();

        assert!(is_won(&board, &RevealedMask::full(board.size())));
        assert!(!is_won(&board, &RevealedMask::new(board.size())));
    }

    #[test]
    fn engine_reveal_wins_in_one_move() {
        let mut engine = PlayEngine::new(sample_board());

        assert_eq!(engine.reveal((0, 0)), Ok(MoveOutcome::Won));
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.view((2, 2)), CellView::Hidden);
        assert_eq!(engine.reveal((2, 2)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn engine_hits_mine_and_sets_triggered_cell() {
        let mut engine = PlayEngine::new(sample_board());

        assert_eq!(engine.reveal((1, 1)), Ok(MoveOutcome::Cleared));
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.reveal((2, 2)), Ok(MoveOutcome::HitMine));
        assert_eq!(engine.state(), EngineState::Lost);
        assert_eq!(engine.triggered_mine(), Some((2, 2)));
    }

    #[test]
    fn engine_rejects_raw_out_of_bounds_input() {
        let mut engine = PlayEngine::new(sample_board());

        let err = engine.reveal_raw((-1, 4)).unwrap_err();

        assert!(err.is_recoverable());
        assert!(engine.state().is_ready());
        assert_eq!(engine.mask().revealed_count(), 0);
    }
}
