//! Text rendering of boards.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    board::{Board, CellState},
    coord::{row_letter, Cell},
    player::OpponentView,
};

pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = '/';
pub const OPEN_GLYPH: char = '.';

/// Glyph for a single cell state. Visible ships show their initial.
pub fn glyph(state: CellState<'_>) -> char {
    match state {
        CellState::ShipVisible(ship) => ship.initial(),
        CellState::Hit => HIT_GLYPH,
        CellState::AttackedMiss => MISS_GLYPH,
        CellState::Open => OPEN_GLYPH,
    }
}

/// Render `board` as a grid: a header of column numbers, then one line per
/// row starting with its letter.
pub fn render_board(board: &Board, reveal_ships: bool) -> String {
    let size = board.size();
    let mut out = String::new();
    out.push_str("  ");
    for col in 1..=size {
        if col > 1 {
            out.push(' ');
        }
        let _ = write!(out, "{}", col);
    }
    out.push('\n');
    for row in 1..=size {
        out.push(row_letter(row));
        for col in 1..=size {
            out.push(' ');
            out.push(glyph(board.cell_state(Cell::new(row, col), reveal_ships)));
        }
        out.push('\n');
    }
    out
}

/// Render what an attacker knows of the opponent's board.
pub fn render_view(view: OpponentView<'_>) -> String {
    render_board(view.board(), false)
}
