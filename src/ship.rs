//! Ship definitions and per-segment hit tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell of the `offset`-th segment of a ship anchored at (`row`, `col`).
    pub fn step(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// Handle to a ship owned by a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipId(usize);

impl ShipId {
    pub(crate) fn new(index: usize) -> Self {
        ShipId(index)
    }

    /// Position of the ship in the board's fleet, in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship with a hit counter for every segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    hits: Vec<u32>,
}

impl Ship {
    /// Build an undamaged ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            hits: vec![0; ship_type.length()],
        }
    }

    /// Build an unnamed ship of `length` segments.
    pub fn with_length(length: usize) -> Self {
        Self::new(ShipType::new("Ship", length))
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

    /// Register a hit on `segment`. Returns `false` if the segment does not exist.
    pub fn hit(&mut self, segment: usize) -> bool {
        match self.hits.get_mut(segment) {
            Some(count) => {
                *count = count.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Number of hits taken by `segment`, or `None` if it does not exist.
    pub fn hits_at(&self, segment: usize) -> Option<u32> {
        self.hits.get(segment).copied()
    }

    /// Total number of hits taken across all segments.
    pub fn hit_count(&self) -> u32 {
        self.hits.iter().sum()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h > 0)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {:?}, sunk: {} }}",
            self.ship_type.name(),
            self.ship_type.length(),
            self.hits,
            self.is_sunk(),
        )
    }
}
