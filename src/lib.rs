#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::Board;
pub use common::{BoardError, PlaceError, Shot};
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use ship::{Orientation, Ship, ShipId, ShipType};
