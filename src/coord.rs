//! Cell coordinates and the letter+number label codec.
//!
//! Cells are 1-indexed. The row is written as a letter (`A` is row 1) and the
//! column as a decimal number, so `C7` is row 3, column 7.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::ParseError;

/// Highest row a label can name (`Z`).
pub const MAX_LABEL_ROW: u8 = 26;
/// Highest column a label can name.
pub const MAX_LABEL_COLUMN: u8 = 99;

/// A single grid square, `(row, col)`, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Returns `true` when the cell lies on a `size`×`size` board.
    pub fn in_bounds(&self, size: u8) -> bool {
        (1..=size).contains(&self.row) && (1..=size).contains(&self.col)
    }

    /// The cell shifted by (`drow`, `dcol`), or `None` if that would leave
    /// the label range.
    pub fn offset(&self, drow: i16, dcol: i16) -> Option<Cell> {
        let row = i16::from(self.row) + drow;
        let col = i16::from(self.col) + dcol;
        if !(1..=i16::from(MAX_LABEL_ROW)).contains(&row)
            || !(1..=i16::from(MAX_LABEL_COLUMN)).contains(&col)
        {
            return None;
        }
        Some(Cell::new(row as u8, col as u8))
    }

    /// Zero-based `(row, col)` for bitboard indexing.
    pub(crate) fn index(&self) -> (usize, usize) {
        (
            usize::from(self.row.saturating_sub(1)),
            usize::from(self.col.saturating_sub(1)),
        )
    }

    /// Inverse of [`Cell::index`].
    pub(crate) fn from_index(row: usize, col: usize) -> Cell {
        Cell::new(row as u8 + 1, col as u8 + 1)
    }

    /// Canonical label, e.g. `A1`.
    pub fn label(&self) -> String {
        to_label(self.row, self.col)
    }

    /// Parse a label and require it to lie on a `size`×`size` board.
    pub fn parse_on_board(label: &str, size: u8) -> Result<Cell, ParseError> {
        let cell = from_label(label)?;
        if !cell.in_bounds(size) {
            return Err(ParseError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                size,
            });
        }
        Ok(cell)
    }

    /// Every cell of a `size`×`size` board, row-major.
    pub fn grid(size: u8) -> impl Iterator<Item = Cell> {
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Cell::new(row, col)))
    }
}

/// Letter used for `row`, or `?` outside `1..=26`.
pub fn row_letter(row: u8) -> char {
    if (1..=MAX_LABEL_ROW).contains(&row) {
        (b'A' + row - 1) as char
    } else {
        '?'
    }
}

/// Encode `(row, col)` as a label such as `B10`.
pub fn to_label(row: u8, col: u8) -> String {
    alloc::format!("{}{}", row_letter(row), col)
}

/// Decode a label such as `b10` into a cell.
///
/// Surrounding whitespace is ignored and the row letter may be either case.
/// Exactly one letter must be followed by one or more digits.
pub fn from_label(label: &str) -> Result<Cell, ParseError> {
    let label = label.trim();
    let mut chars = label.chars();
    let row_ch = chars.next().ok_or(ParseError::Empty)?;
    if !row_ch.is_alphabetic() {
        return Err(ParseError::MissingRow);
    }
    if !row_ch.is_ascii_alphabetic() {
        return Err(ParseError::RowOutOfRange);
    }
    let row = row_ch.to_ascii_uppercase() as u8 - b'A' + 1;

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(ParseError::MissingColumn);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidColumn);
    }
    let col: u32 = digits.parse().map_err(|_| ParseError::ColumnOutOfRange)?;
    if col == 0 || col > u32::from(MAX_LABEL_COLUMN) {
        return Err(ParseError::ColumnOutOfRange);
    }
    Ok(Cell::new(row, col as u8))
}

/// Every cell between `a` and `b` inclusive, ordered low to high.
///
/// The endpoints are expected to share a row or a column; given two corners
/// the whole rectangle is returned. The result does not depend on argument
/// order.
pub fn span(a: Cell, b: Cell) -> Vec<Cell> {
    let (r0, r1) = (a.row.min(b.row), a.row.max(b.row));
    let (c0, c1) = (a.col.min(b.col), a.col.max(b.col));
    let mut cells = Vec::with_capacity(usize::from(r1 - r0 + 1) * usize::from(c1 - c0 + 1));
    for row in r0..=r1 {
        for col in c0..=c1 {
            cells.push(Cell::new(row, col));
        }
    }
    cells
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_letter(self.row), self.col)
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_label(s)
    }
}
