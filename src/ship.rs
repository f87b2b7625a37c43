//! Ship definitions and hit tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Cell;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A placed ship: its fixed cells and the subset of them that has been hit.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Cell>,
    hits: BTreeSet<Cell>,
}

impl Ship {
    /// Build a ship over `cells`.
    ///
    /// The cells are taken as given: callers are expected to pass exactly
    /// `length` contiguous cells on one axis, as produced by
    /// [`span`](crate::span) from a candidate stern.
    pub fn new(ship_type: ShipType, cells: Vec<Cell>) -> Self {
        Self {
            ship_type,
            cells,
            hits: BTreeSet::new(),
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells, in placement order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// First letter of the name, used when drawing the owner's board.
    pub fn initial(&self) -> char {
        self.name().chars().next().unwrap_or('?')
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn was_hit(&self, cell: Cell) -> bool {
        self.hits.contains(&cell)
    }

    /// Record a hit at `cell`. Hitting the same cell again changes nothing.
    /// The caller must have checked [`Ship::occupies`].
    pub fn record_hit(&mut self, cell: Cell) {
        self.hits.insert(cell);
    }

    /// Number of distinct cells hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_dead(&self) -> bool {
        self.hits.len() == self.length()
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ name: \"{}\", cells: [", self.name())?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "], hits: {} }}", self.hits.len())
    }
}
