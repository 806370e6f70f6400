use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
/// Number of cells on the board, indexed row-major.
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Destroyer", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
