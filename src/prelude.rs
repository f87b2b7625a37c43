//! Commonly used types and utilities for ease of import.

pub use crate::{
    span, AiPlayer, Board, BoardError, Cell, CellState, Game, GameStatus, OpponentView,
    ParseError, Player, PlayerError, PlayerNode, Ship, ShipType, ShotOutcome, FLEET,
};

#[cfg(feature = "std")]
pub use crate::CliPlayer;
