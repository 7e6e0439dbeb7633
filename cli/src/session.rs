use std::io::{self, BufRead, Write};

use rand::Rng;
use sweeper_core::{Board, GameError, MoveOutcome, PlayEngine, RevealedMask, build_board};
use thiserror::Error;

use crate::prompt::{InputError, Prompt, parse_move};

/// Source of raw move lines, `None` once the player is gone.
pub trait MoveSource {
    fn next_move(&mut self) -> io::Result<Option<String>>;
}

/// Where the board and messages for the player go.
pub trait RenderSink {
    fn render(&mut self, board: &Board, mask: &RevealedMask) -> io::Result<()>;
    fn message(&mut self, text: &str) -> io::Result<()>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl MoveError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Input(_) => true,
            Self::Game(err) => err.is_recoverable(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    /// Input ended before the game did.
    Abandoned,
}

/// Board settings for new games; missing values are asked for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub rows: Option<u32>,
    pub cols: Option<u32>,
    pub mines: Option<u32>,
    /// Show the whole board before the first move.
    pub peek: bool,
}

pub fn play_move(engine: &mut PlayEngine, line: &str) -> Result<MoveOutcome, MoveError> {
    let raw = parse_move(line)?;
    Ok(engine.reveal_raw(raw)?)
}

/// Read-reveal-render loop for one board until it is won, lost, or input runs out.
pub fn run_session(
    engine: &mut PlayEngine,
    moves: &mut impl MoveSource,
    sink: &mut impl RenderSink,
) -> anyhow::Result<SessionOutcome> {
    loop {
        let Some(line) = moves.next_move()? else {
            log::info!("Input ended, abandoning game");
            return Ok(SessionOutcome::Abandoned);
        };

        match play_move(engine, &line) {
            Ok(MoveOutcome::HitMine) => {
                sink.message("You lose, you selected a mine.")?;
                sink.render(engine.board(), engine.mask())?;
                return Ok(SessionOutcome::Lost);
            }
            Ok(MoveOutcome::Won) => {
                sink.message("You won!")?;
                sink.render(engine.board(), engine.mask())?;
                return Ok(SessionOutcome::Won);
            }
            Ok(MoveOutcome::Cleared) => sink.message("You cleared an area, please continue.")?,
            Err(err) if err.is_recoverable() => {
                log::debug!("Rejected move {:?}: {}", line, err);
                sink.message(&err.to_string())?;
            }
            Err(err) => return Err(err.into()),
        }
        sink.render(engine.board(), engine.mask())?;
    }
}

/// Asks for anything missing from `options`, builds a board from `rng` and plays it.
///
/// Returns `None` when input ends before a board could be built.
pub fn play_game<R, W>(
    options: &GameOptions,
    rng: &mut impl Rng,
    prompt: &mut Prompt<R, W>,
    sink: &mut impl RenderSink,
) -> anyhow::Result<Option<SessionOutcome>>
where
    R: BufRead,
    W: Write,
{
    let Some(rows) = answer_or_ask(options.rows, prompt, "Number of rows:")? else {
        return Ok(None);
    };
    let Some(cols) = answer_or_ask(options.cols, prompt, "Number of columns:")? else {
        return Ok(None);
    };
    let Some(mines) = answer_or_ask(options.mines, prompt, "Number of mines:")? else {
        return Ok(None);
    };

    let board = match build_board(rows, cols, mines, &mut *rng) {
        Ok(board) => board,
        Err(err) => {
            log::debug!("Rejected configuration {}x{} with {} mines", rows, cols, mines);
            sink.message(&err.to_string())?;
            return Ok(Some(SessionOutcome::Abandoned));
        }
    };
    log::info!("Starting {}x{} game with {} mines", rows, cols, mines);

    if options.peek {
        sink.render(&board, &RevealedMask::full(board.size()))?;
    }

    let mut engine = PlayEngine::new(board);
    run_session(&mut engine, prompt, sink).map(Some)
}

fn answer_or_ask<R: BufRead, W: Write>(
    given: Option<u32>,
    prompt: &mut Prompt<R, W>,
    question: &str,
) -> io::Result<Option<u32>> {
    match given {
        Some(value) => Ok(Some(value)),
        None => prompt.ask_number(question),
    }
}
