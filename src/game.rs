//! Turn controller: two boards and whose turn it is.

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Cell,
};

/// Number of players (and boards) in a game.
pub const NUM_PLAYERS: usize = 2;

/// Index of the human (or first) player's board.
pub const HUMAN: usize = 0;
/// Index of the computer (or second) player's board.
pub const COMPUTER: usize = 1;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// At least one board has no ships yet.
    Setup,
    /// Both fleets still have a ship afloat.
    InProgress,
    /// One fleet is destroyed; `winner` owns the surviving board.
    Over { winner: usize },
}

/// Two boards and a round-robin turn indicator.
#[derive(Debug, Clone, Default)]
pub struct Game {
    boards: [Board; NUM_PLAYERS],
    current_player: usize,
}

impl Game {
    /// Create a game with two empty boards; player 0 moves first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Index of the player waiting for their turn.
    pub fn opponent(&self) -> usize {
        (self.current_player + 1) % NUM_PLAYERS
    }

    /// Board owned by `player`.
    ///
    /// # Panics
    /// If `player` is not 0 or 1.
    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    /// Mutable board owned by `player`, for ship placement.
    ///
    /// # Panics
    /// If `player` is not 0 or 1.
    pub fn board_mut(&mut self, player: usize) -> &mut Board {
        &mut self.boards[player]
    }

    pub fn boards(&self) -> &[Board; NUM_PLAYERS] {
        &self.boards
    }

    /// Returns `true` while both fleets are alive.
    pub fn is_playing(&self) -> bool {
        self.boards.iter().all(Board::is_fleet_alive)
    }

    /// Hand the turn to the next player, wrapping after the last.
    pub fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % NUM_PLAYERS;
    }

    /// The current player attacks `cell` on the opponent's board.
    ///
    /// The turn does not advance; callers check [`Game::is_playing`] first.
    pub fn fire(&mut self, cell: Cell) -> Result<ShotOutcome, BoardError> {
        let target = self.opponent();
        self.boards[target].fire(cell)
    }

    /// Owner of the only fleet still afloat once the other is destroyed.
    pub fn winner(&self) -> Option<usize> {
        match self.status() {
            GameStatus::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.boards.iter().any(|b| b.ships().is_empty()) {
            return GameStatus::Setup;
        }
        let alive = [
            self.boards[HUMAN].is_fleet_alive(),
            self.boards[COMPUTER].is_fleet_alive(),
        ];
        match alive {
            [true, false] => GameStatus::Over { winner: HUMAN },
            [false, true] => GameStatus::Over { winner: COMPUTER },
            // Both fleets dead cannot come out of alternating turns; report
            // the player who fired last.
            [false, false] => GameStatus::Over {
                winner: self.current_player,
            },
            [true, true] => GameStatus::InProgress,
        }
    }
}
