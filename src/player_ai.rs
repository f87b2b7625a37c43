use alloc::vec::Vec;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    config::{FLEET, MAX_RANDOM_ATTEMPTS},
    coord::Cell,
    player::{OpponentView, Player, PlayerError},
    ship::ShipType,
};

/// Computer player: random bows, random sterns among the candidates and
/// random shots at cells it has not fired on yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn random_cell<R: Rng>(rng: &mut R, size: u8) -> Cell {
    Cell::new(rng.random_range(1..=size), rng.random_range(1..=size))
}

/// Pick an open bow by random draws, scanning the board once the draws run
/// out. `None` only when no cell is open.
pub fn random_bow<R: Rng>(rng: &mut R, board: &Board) -> Option<Cell> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let bow = random_cell(rng, board.size());
        if board.is_open_for_bow(bow) {
            return Some(bow);
        }
        debug!("bow {} would be on a ship, trying again", bow);
    }
    debug!("no open bow after {} draws, scanning board", MAX_RANDOM_ATTEMPTS);
    board.open_bows().choose(rng).copied()
}

/// Choose a legal (bow, stern) pair for `ship_type`.
///
/// Bows whose candidate set is empty are redrawn. After
/// `MAX_RANDOM_ATTEMPTS` bows every legal pair is enumerated and one is
/// chosen uniformly.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    board: &Board,
    ship_type: ShipType,
) -> Result<(Cell, Cell), BoardError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let bow = random_bow(rng, board).ok_or(BoardError::UnableToPlaceShip)?;
        let sterns = board.possible_stern_cells(bow, ship_type.length());
        if let Some(&stern) = sterns.choose(rng) {
            return Ok((bow, stern));
        }
        debug!(
            "no spot for {} from {}, trying again",
            ship_type.name(),
            bow
        );
    }
    let pairs: Vec<(Cell, Cell)> = board
        .open_bows()
        .into_iter()
        .flat_map(|bow| {
            board
                .possible_stern_cells(bow, ship_type.length())
                .into_iter()
                .map(move |stern| (bow, stern))
        })
        .collect();
    pairs
        .choose(rng)
        .copied()
        .ok_or(BoardError::UnableToPlaceShip)
}

/// Pick a cell not yet attacked, with the same draw-then-scan strategy as
/// [`random_bow`].
pub fn random_target<R: Rng>(
    rng: &mut R,
    opponent: OpponentView<'_>,
) -> Result<Cell, BoardError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let cell = random_cell(rng, opponent.size());
        if !opponent.is_attacked(cell) {
            return Ok(cell);
        }
    }
    debug!("no open target after {} draws, scanning board", MAX_RANDOM_ATTEMPTS);
    opponent
        .open_targets()
        .choose(rng)
        .copied()
        .ok_or(BoardError::NoTargetsLeft)
}

/// Place every ship of the fleet at random legal positions.
pub fn place_fleet_randomly<R: Rng>(
    rng: &mut R,
    board: &mut Board,
) -> Result<(), BoardError> {
    for def in FLEET {
        let (bow, stern) = random_placement(rng, board, def)?;
        board.place_ship_between(def, bow, stern)?;
        debug!("{} placed from {} to {}", def.name(), bow, stern);
    }
    Ok(())
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        place_fleet_randomly(rng, board)?;
        Ok(())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: OpponentView<'_>,
    ) -> Result<Cell, PlayerError> {
        Ok(random_target(rng, opponent)?)
    }
}
