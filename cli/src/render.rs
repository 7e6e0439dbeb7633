use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::style::{Color, PrintStyledContent, Stylize, style};
use sweeper_core::{Board, CellView, RevealedMask};

use crate::session::RenderSink;

pub const HIDDEN_GLYPH: char = '-';
pub const EMPTY_GLYPH: char = ' ';
pub const MINE_GLYPH: char = '*';

pub fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => HIDDEN_GLYPH,
        CellView::Empty => EMPTY_GLYPH,
        CellView::Mine => MINE_GLYPH,
        CellView::Count(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Classic minesweeper palette.
pub const fn color(view: CellView) -> Color {
    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb { r, g, b }
    }

    match view {
        CellView::Hidden => rgb(0x88, 0x88, 0x88),
        CellView::Empty => rgb(0x00, 0x00, 0x00),
        CellView::Mine => rgb(0xee, 0xee, 0xee),
        CellView::Count(1) => rgb(0x2b, 0x12, 0xff),
        CellView::Count(2) => rgb(0x2b, 0x7b, 0x00),
        CellView::Count(3) => rgb(0xcc, 0x00, 0x00),
        CellView::Count(4) => rgb(0x0f, 0x04, 0x7c),
        CellView::Count(5) => rgb(0x72, 0x00, 0x00),
        CellView::Count(6) => rgb(0x30, 0x7b, 0x7b),
        CellView::Count(7) => rgb(0x00, 0x00, 0x00),
        CellView::Count(_) => rgb(0x7b, 0x7b, 0x7b),
    }
}

/// Writes the board as text, one line per row.
pub struct TerminalRenderer<W> {
    out: W,
    colored: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, board: &Board, mask: &RevealedMask) -> io::Result<()> {
        let (rows, cols) = board.size();
        for row in 0..rows {
            for col in 0..cols {
                let view = board.view(mask, (row, col));
                if self.colored {
                    self.out
                        .queue(PrintStyledContent(style(glyph(view)).with(color(view))))?;
                } else {
                    write!(self.out, "{}", glyph(view))?;
                }
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
