use alloc::vec::Vec;
use core::fmt;
use rand::rngs::SmallRng;

use crate::{
    board::{Board, CellState},
    common::{BoardError, ShotOutcome},
    coord::Cell,
};

/// Errors a player can raise while placing ships or choosing targets.
#[derive(Debug)]
pub enum PlayerError {
    /// The board rejected a placement or shot.
    Board(BoardError),
    /// Reading input or writing prompts failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
    /// The input stream ended before the player finished.
    InputClosed,
    /// The match ran past the turn cap without a winner.
    TurnLimit,
}

impl From<BoardError> for PlayerError {
    fn from(err: BoardError) -> Self {
        PlayerError::Board(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err)
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Board(e) => write!(f, "Board error: {}", e),
            #[cfg(feature = "std")]
            PlayerError::Io(e) => write!(f, "I/O error: {}", e),
            PlayerError::InputClosed => write!(f, "Input ended before the game finished"),
            PlayerError::TurnLimit => write!(f, "Turn limit reached without a winner"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Board(e) => Some(e),
            PlayerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// What an attacker may see of the opponent's board: attacked cells and
/// their results, never the position of unhit ships.
#[derive(Debug, Clone, Copy)]
pub struct OpponentView<'a> {
    board: &'a Board,
}

impl<'a> OpponentView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Cell state with ships hidden.
    pub fn cell_state(&self, cell: Cell) -> CellState<'a> {
        self.board.cell_state(cell, false)
    }

    pub fn is_attacked(&self, cell: Cell) -> bool {
        self.board.is_attacked(cell)
    }

    /// Cells not yet attacked, row-major.
    pub fn open_targets(&self) -> Vec<Cell> {
        self.board.open_targets()
    }

    pub(crate) fn board(&self) -> &'a Board {
        self.board
    }
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its fleet on its own board
/// - Selecting targets to attack
/// - Handling feedback from shots
pub trait Player {
    /// Place the whole fleet onto the provided board, in fleet order.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError>;

    /// Choose the next cell to attack on the opponent's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: OpponentView<'_>,
    ) -> Result<Cell, PlayerError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _cell: Cell, _result: ShotOutcome) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(
        &mut self,
        _cell: Cell,
        _result: ShotOutcome,
    ) -> Result<(), PlayerError> {
        Ok(())
    }

    /// Inform the player that the game is over.
    fn handle_game_over(
        &mut self,
        _won: bool,
        _own: &Board,
        _opponent: OpponentView<'_>,
    ) -> Result<(), PlayerError> {
        Ok(())
    }
}
