use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Fleet shared by both players, in placement order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws the AI makes before scanning the board exhaustively.
pub const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Upper bound on shots in a single match. Each board has at most
/// `BOARD_SIZE²` distinct targets, so two players never need more.
pub const MAX_TURNS: usize = 2 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

