//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, Orientation, Ship, ShipId, Shot, BOARD_SIZE, SHIPS};

#[cfg(feature = "std")]
pub use crate::init_logging;
