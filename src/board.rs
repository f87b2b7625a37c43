//! Game board state: placed ships, attacked cells and placement candidates.

use alloc::vec::Vec;
use log::{trace, warn};

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coord::{span, Cell};
use crate::ship::{Ship, ShipType};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// What a single cell looks like to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState<'a> {
    /// Not attacked, and either empty or hiding a ship.
    Open,
    /// Attacked and nothing was there.
    AttackedMiss,
    /// Attacked and a ship took the hit.
    Hit,
    /// Not attacked, ship shown to its owner.
    ShipVisible(&'a Ship),
}

/// One player's board: the fleet placed so far and every attacked cell.
#[derive(Debug, Clone, Default)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    attacks: BB,
}

impl Board {
    /// Create an empty board (no ships, no attacks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the square board.
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of distinct cells attacked so far.
    pub fn attack_count(&self) -> usize {
        self.attacks.count_ones()
    }

    fn index_of(&self, cell: Cell) -> Result<(usize, usize), BoardError> {
        if !cell.in_bounds(self.size()) {
            return Err(BoardError::OutOfBounds {
                row: cell.row(),
                col: cell.col(),
            });
        }
        Ok(cell.index())
    }

    /// Append a ship over `cells` without checking for overlap.
    ///
    /// This is the trusted primitive behind [`Board::place_ship_between`].
    /// Keeping ships apart is the caller's job; only cells that fall off the
    /// board are rejected.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        cells: Vec<Cell>,
    ) -> Result<&Ship, BoardError> {
        let mut positions = Vec::with_capacity(cells.len());
        for &cell in &cells {
            positions.push(self.index_of(cell)?);
        }
        let mask = BB::from_positions(positions)?;
        if !(self.ship_map & mask).is_empty() {
            warn!("{} placed over another ship", ship_type.name());
        }
        self.ship_map |= mask;
        self.ships.push(Ship::new(ship_type, cells));
        let ship = &self.ships[self.ships.len() - 1];
        trace!("placed {:?}", ship);
        Ok(ship)
    }

    /// Place `ship_type` from `bow` to `stern`, checking both ends.
    ///
    /// The bow must be open and `stern` must be one of
    /// [`Board::possible_stern_cells`] for that bow.
    pub fn place_ship_between(
        &mut self,
        ship_type: ShipType,
        bow: Cell,
        stern: Cell,
    ) -> Result<&Ship, BoardError> {
        if !self.is_open_for_bow(bow) {
            return Err(BoardError::BowUnavailable);
        }
        let sterns = self.possible_stern_cells(bow, ship_type.length());
        if sterns.is_empty() {
            return Err(BoardError::InfeasiblePlacement);
        }
        if !sterns.contains(&stern) {
            return Err(BoardError::InvalidStern);
        }
        self.place_ship(ship_type, span(bow, stern))
    }

    /// First ship covering `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(cell))
    }

    fn is_occupied(&self, cell: Cell) -> bool {
        let (r, c) = cell.index();
        cell.in_bounds(self.size()) && self.ship_map.get(r, c).unwrap_or(false)
    }

    /// Returns `true` if `cell` has been attacked. Off-board cells never are.
    pub fn is_attacked(&self, cell: Cell) -> bool {
        let (r, c) = cell.index();
        cell.in_bounds(self.size()) && self.attacks.get(r, c).unwrap_or(false)
    }

    /// State of `cell`. With `reveal_ships` false, unhit ships read as
    /// `Open`, which is the view the attacking opponent gets.
    pub fn cell_state(&self, cell: Cell, reveal_ships: bool) -> CellState<'_> {
        if self.is_attacked(cell) {
            if self.ships.iter().any(|s| s.was_hit(cell)) {
                CellState::Hit
            } else {
                CellState::AttackedMiss
            }
        } else {
            match self.ship_at(cell) {
                Some(ship) if reveal_ships => CellState::ShipVisible(ship),
                _ => CellState::Open,
            }
        }
    }

    /// A bow may only go on an on-board cell that shows `Open` with ships
    /// revealed.
    pub fn is_open_for_bow(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size()) && matches!(self.cell_state(cell, true), CellState::Open)
    }

    /// Attack `cell`, returning the ship hit there, if any.
    ///
    /// Attacking the same cell twice is allowed and leaves the attacked set
    /// and the ship's hits unchanged.
    pub fn attack(&mut self, cell: Cell) -> Result<Option<&Ship>, BoardError> {
        let (r, c) = self.index_of(cell)?;
        self.attacks.set(r, c)?;
        match self.ships.iter_mut().find(|s| s.occupies(cell)) {
            Some(ship) => {
                ship.record_hit(cell);
                trace!("{} hit at {}", ship.name(), cell);
                Ok(Some(&*ship))
            }
            None => {
                trace!("miss at {}", cell);
                Ok(None)
            }
        }
    }

    /// [`Board::attack`] summarised for the players.
    pub fn fire(&mut self, cell: Cell) -> Result<ShotOutcome, BoardError> {
        Ok(match self.attack(cell)? {
            Some(ship) if ship.is_dead() => ShotOutcome::Sunk(ship.name()),
            Some(ship) => ShotOutcome::Hit(ship.name()),
            None => ShotOutcome::Miss,
        })
    }

    /// Returns `true` while any ship is afloat. An empty board has no fleet.
    pub fn is_fleet_alive(&self) -> bool {
        self.ships.iter().any(Ship::is_alive)
    }

    /// Stern cells that complete a legal placement from `bow`.
    ///
    /// Candidates lie `length - 1` cells away along one axis, in the order
    /// left, right, up, down. Candidates off the board, or whose span would
    /// touch an existing ship, are dropped. An empty result means the bow
    /// cannot hold a ship of this length.
    pub fn possible_stern_cells(&self, bow: Cell, length: usize) -> Vec<Cell> {
        let mut sterns = Vec::with_capacity(4);
        if length == 0 || !bow.in_bounds(self.size()) {
            return sterns;
        }
        let Ok(reach) = i16::try_from(length - 1) else {
            return sterns;
        };
        let candidates = [
            bow.offset(0, -reach),
            bow.offset(0, reach),
            bow.offset(-reach, 0),
            bow.offset(reach, 0),
        ];
        for stern in candidates.into_iter().flatten() {
            if !stern.in_bounds(self.size()) || sterns.contains(&stern) {
                continue;
            }
            if span(bow, stern).into_iter().any(|c| self.is_occupied(c)) {
                continue;
            }
            sterns.push(stern);
        }
        trace!("sterns for {} (length {}): {:?}", bow, length, sterns);
        sterns
    }

    /// Cells attacked so far, row-major.
    pub fn attacked_cells(&self) -> Vec<Cell> {
        self.attacks
            .iter_set_bits()
            .map(|(r, c)| Cell::from_index(r, c))
            .collect()
    }

    /// Cells not yet attacked, row-major.
    pub fn open_targets(&self) -> Vec<Cell> {
        Cell::grid(self.size())
            .filter(|&c| !self.is_attacked(c))
            .collect()
    }

    /// Cells where a bow may go, row-major.
    pub fn open_bows(&self) -> Vec<Cell> {
        Cell::grid(self.size())
            .filter(|&c| self.is_open_for_bow(c))
            .collect()
    }
}
