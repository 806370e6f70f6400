//! Common types for the board: errors and attack results.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::{Ship, ShipId};

/// Result of an attack that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Shot {
    /// Attack hit water.
    Miss,
    /// Attack hit `segment` of a ship that is still afloat.
    Hit { ship: ShipId, segment: usize },
    /// Attack hit `segment` and every segment of the ship is now hit.
    Sink {
        ship: ShipId,
        segment: usize,
        name: &'static str,
    },
}

impl Shot {
    /// Returns `true` for any shot that struck a ship.
    pub fn is_hit(&self) -> bool {
        !matches!(self, Shot::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the board.
    OutOfBounds { row: isize, col: isize },
    /// Ships must have at least one segment.
    InvalidShipLength,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipAdjacent,
    /// Cell was already attacked.
    AlreadyAttacked { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidShipLength => write!(f, "Ship length must be positive"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::AlreadyAttacked { row, col } => {
                write!(f, "Cell ({}, {}) was already attacked", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Rejected placement. Hands the ship back to the caller.
#[derive(Debug)]
pub struct PlaceError {
    reason: BoardError,
    ship: Ship,
}

impl PlaceError {
    pub(crate) fn new(reason: BoardError, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Why the placement was rejected.
    pub fn reason(&self) -> &BoardError {
        &self.reason
    }

    /// The ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship so it can be placed elsewhere.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl From<PlaceError> for BoardError {
    fn from(err: PlaceError) -> Self {
        err.reason
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not place {}: {}", self.ship.name(), self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
