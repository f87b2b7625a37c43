//! Common types for broadside: parse and board errors, shot outcomes.

use crate::bitboard::BitBoardError;

/// Player-facing report of a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No ship occupies the attacked cell.
    Miss,
    /// A ship was hit and is still afloat, carrying its name.
    Hit(&'static str),
    /// The hit left the named ship with every segment hit.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// Returns `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss."),
            ShotOutcome::Hit(name) => write!(f, "Hit. {}.", name),
            ShotOutcome::Sunk(name) => write!(f, "Hit. {}. Sunk!", name),
        }
    }
}

/// Errors produced while decoding a cell label such as `B7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or only whitespace.
    Empty,
    /// Input did not start with a row letter.
    MissingRow,
    /// Row letter was not followed by any digits.
    MissingColumn,
    /// Characters after the row letter were not all digits.
    InvalidColumn,
    /// Row letter outside `A..=Z`.
    RowOutOfRange,
    /// Column number outside `1..=99`.
    ColumnOutOfRange,
    /// Label was well formed but lies outside the board.
    OutOfBounds { row: u8, col: u8, size: u8 },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty input"),
            ParseError::MissingRow => write!(f, "Missing row letter (e.g. B7)"),
            ParseError::MissingColumn => write!(f, "Missing column number (e.g. B7)"),
            ParseError::InvalidColumn => write!(f, "Column must be a number"),
            ParseError::RowOutOfRange => write!(f, "Row must be a letter A-Z"),
            ParseError::ColumnOutOfRange => write!(f, "Column must be between 1 and 99"),
            ParseError::OutOfBounds { row, col, size } => write!(
                f,
                "Cell (row {}, column {}) is off the {}x{} board",
                row, col, size, size
            ),
        }
    }
}

/// Errors returned by Board and player operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index outside the grid).
    BitBoardError(BitBoardError),
    /// Cell lies outside the board.
    OutOfBounds { row: u8, col: u8 },
    /// Bow is off the board or already covered by a ship.
    BowUnavailable,
    /// No stern produces a legal placement from the chosen bow.
    InfeasiblePlacement,
    /// Stern is not one of the candidate sterns for the bow.
    InvalidStern,
    /// Random placement gave up without finding a legal position.
    UnableToPlaceShip,
    /// Every cell on the target board has already been attacked.
    NoTargetsLeft,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell (row {}, column {}) is off the board", row, col)
            }
            BoardError::BowUnavailable => write!(f, "Bow must be an open cell on the board"),
            BoardError::InfeasiblePlacement => {
                write!(f, "Ship cannot be placed from this bow")
            }
            BoardError::InvalidStern => write!(f, "Stern is not one of the possible positions"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::NoTargetsLeft => write!(f, "Every cell has already been attacked"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
