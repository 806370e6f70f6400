//! Board state for one player: ship placement, attacks and fleet status.
//!
//! Cells are stored row-major (`index = row * BOARD_SIZE + col`). Each cell
//! holds the [`ShipId`] of the ship covering it; the ships themselves live in
//! the board's fleet list so every cell of a ship shares one hit record.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, PlaceError, Shot};
use crate::config::{BOARD_SIZE, CELLS, SHIPS};
use crate::ship::{Orientation, Ship, ShipId};

type BB = BitBoard<u128, BOARD_SIZE>;

const _: () = assert!(CELLS <= u128::BITS as usize);

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Flattened index of (`row`, `col`), or `None` when it lies off the board.
fn cell_index(row: isize, col: isize) -> Option<usize> {
    let size = BOARD_SIZE as isize;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some(row as usize * BOARD_SIZE + col as usize)
    } else {
        None
    }
}

/// Flattened indices covered by a ship of `length` anchored at `anchor`.
/// The caller must have checked that the ship fits.
fn footprint(anchor: usize, length: usize, orientation: Orientation) -> impl Iterator<Item = usize> {
    let (row, col) = (anchor / BOARD_SIZE, anchor % BOARD_SIZE);
    (0..length).map(move |i| {
        let (r, c) = orientation.step(row, col, i);
        r * BOARD_SIZE + c
    })
}

/// The 8-connected neighbours of a cell that lie on the board.
fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    let (row, col) = ((index / BOARD_SIZE) as isize, (index % BOARD_SIZE) as isize);
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| cell_index(row + dr, col + dc))
}

/// Main board state: ship placements, misses and attacked cells.
#[derive(Clone)]
pub struct Board {
    cells: [Option<ShipId>; CELLS],
    fleet: Vec<Ship>,
    missed: BB,
    attacked: BB,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [None; CELLS],
            fleet: Vec::new(),
            missed: BB::new(),
            attacked: BB::new(),
        }
    }

    /// Reset to the freshly constructed state.
    pub fn clear(&mut self) {
        self.cells = [None; CELLS];
        self.fleet.clear();
        self.missed.clear_all();
        self.attacked.clear_all();
    }

    /// Ships placed on this board, in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id.index())
    }

    /// Ship covering (`row`, `col`), if any.
    pub fn ship_at(&self, row: isize, col: isize) -> Option<ShipId> {
        cell_index(row, col).and_then(|i| self.cells[i])
    }

    /// Returns `true` if an attack at (`row`, `col`) hit water.
    pub fn is_missed(&self, row: isize, col: isize) -> bool {
        cell_index(row, col).is_some_and(|i| self.missed.get_index(i))
    }

    /// Cells where an attack hit water.
    pub fn missed_cells(&self) -> BB {
        self.missed
    }

    /// Every cell that has received an attack.
    pub fn attacked_cells(&self) -> BB {
        self.attacked
    }

    /// Number of placed ships that are still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Check whether a ship of `length` could be anchored at (`row`, `col`).
    ///
    /// Rejections are reported in check order: bad length, anchor off the
    /// board, ship running past the edge, overlap, then contact with another
    /// ship through any of the 8 neighbours of each target cell.
    pub fn check_placement(
        &self,
        length: usize,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        let anchor = cell_index(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        let start = match orientation {
            Orientation::Horizontal => anchor % BOARD_SIZE,
            Orientation::Vertical => anchor / BOARD_SIZE,
        };
        if length > BOARD_SIZE - start {
            return Err(BoardError::ShipOutOfBounds);
        }
        if footprint(anchor, length, orientation).any(|i| self.cells[i].is_some()) {
            return Err(BoardError::ShipOverlaps);
        }
        if footprint(anchor, length, orientation)
            .flat_map(neighbors)
            .any(|i| self.cells[i].is_some())
        {
            return Err(BoardError::ShipAdjacent);
        }
        Ok(())
    }

    /// Returns `true` if `ship` could be placed at (`row`, `col`). Never mutates.
    pub fn is_placement_possible(
        &self,
        ship: &Ship,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> bool {
        self.check_placement(ship.length(), row, col, orientation)
            .is_ok()
    }

    /// Place `ship` anchored at (`row`, `col`), extending right or down.
    /// On rejection the board is untouched and the ship is returned in the error.
    ///
    /// Miss and attack markers on the footprint are cleared: a missed cell is
    /// never occupied.
    pub fn try_place_ship(
        &mut self,
        ship: Ship,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> Result<ShipId, PlaceError> {
        if let Err(reason) = self.check_placement(ship.length(), row, col, orientation) {
            return Err(PlaceError::new(reason, ship));
        }
        let anchor = row as usize * BOARD_SIZE + col as usize;
        let id = ShipId::new(self.fleet.len());
        for i in footprint(anchor, ship.length(), orientation) {
            self.cells[i] = Some(id);
            self.missed.remove_index(i);
            self.attacked.remove_index(i);
        }
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship.name(),
            row,
            col,
            orientation
        );
        self.fleet.push(ship);
        Ok(id)
    }

    /// Place `ship`, returning `false` with no mutation if the placement is invalid.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> bool {
        self.try_place_ship(ship, row, col, orientation).is_ok()
    }

    /// Place the standard fleet at uniformly random cells and orientations.
    ///
    /// Does nothing and returns `false` unless the board is empty. Rejected
    /// draws are retried until every ship is down.
    pub fn place_ships_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_empty() {
            debug!("board already holds ships; skipping random placement");
            return false;
        }
        let mut attempts = 0usize;
        for def in SHIPS.iter() {
            let mut ship = Ship::new(*def);
            loop {
                attempts += 1;
                let index = rng.random_range(0..CELLS);
                let orientation = if rng.random() {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                let (row, col) = ((index / BOARD_SIZE) as isize, (index % BOARD_SIZE) as isize);
                match self.try_place_ship(ship, row, col, orientation) {
                    Ok(_) => break,
                    Err(err) => {
                        trace!("random placement rejected: {}", err);
                        ship = err.into_ship();
                    }
                }
            }
        }
        debug!(
            "placed {} ships after {} attempts",
            self.fleet.len(),
            attempts
        );
        true
    }

    /// Attack (`row`, `col`) and report what was struck.
    ///
    /// Unlike [`receive_attack`](Self::receive_attack), repeated attacks on a
    /// cell are rejected without touching the board.
    pub fn attack(&mut self, row: isize, col: isize) -> Result<Shot, BoardError> {
        let index = cell_index(row, col).ok_or(BoardError::OutOfBounds { row, col })?;
        let (r, c) = (index / BOARD_SIZE, index % BOARD_SIZE);
        if self.attacked.get(r, c)? {
            return Err(BoardError::AlreadyAttacked { row: r, col: c });
        }
        Ok(self.resolve_attack(index))
    }

    /// Attack (`row`, `col`). Returns `true` on a hit; `false` on a miss or
    /// when the coordinate is off the board, which leaves the board untouched.
    pub fn receive_attack(&mut self, row: isize, col: isize) -> bool {
        match cell_index(row, col) {
            Some(index) => self.resolve_attack(index).is_hit(),
            None => false,
        }
    }

    fn resolve_attack(&mut self, index: usize) -> Shot {
        self.attacked.insert_index(index);
        let Some(id) = self.cells[index] else {
            self.missed.insert_index(index);
            trace!("miss at cell {}", index);
            return Shot::Miss;
        };
        let segment = self.segment_at(index);
        let ship = &mut self.fleet[id.index()];
        ship.hit(segment);
        trace!("hit {} segment {} at cell {}", ship.name(), segment, index);
        if ship.is_sunk() {
            debug!("{} sunk", ship.name());
            Shot::Sink {
                ship: id,
                segment,
                name: ship.name(),
            }
        } else {
            Shot::Hit { ship: id, segment }
        }
    }

    /// Segment of the ship at `index`, counted from its anchor.
    ///
    /// The axis is inferred from which neighbour is occupied: left first,
    /// then above. This relies on ships never touching.
    fn segment_at(&self, index: usize) -> usize {
        let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
        let occupied = |i: usize| self.cells[i].is_some();
        if col > 0 && occupied(index - 1) {
            (1..=col).take_while(|&i| occupied(index - i)).count()
        } else if row > 0 && occupied(index - BOARD_SIZE) {
            (1..=row)
                .take_while(|&i| occupied(index - i * BOARD_SIZE))
                .count()
        } else {
            0
        }
    }

    /// Returns `true` once at least one ship is placed and every placed ship is sunk.
    pub fn is_game_over(&self) -> bool {
        let mut occupied = self.cells.iter().flatten().peekable();
        occupied.peek().is_some() && occupied.all(|id| self.fleet[id.index()].is_sunk())
    }

    /// Returns `true` if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of unoccupied cells.
    pub fn empty_fields_amount(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  fleet: {:?},\n  missed: {:?},\n  attacked: {:?}\n}}",
            self.fleet, self.missed, self.attacked
        )
    }
}

impl fmt::Display for Board {
    /// `■` ship, `X` hit ship, `○` miss, `□` water.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let i = r * BOARD_SIZE + c;
                let mark = match (self.cells[i], self.attacked.get_index(i)) {
                    (Some(_), true) => 'X',
                    (Some(_), false) => '■',
                    (None, true) => '○',
                    (None, false) => '□',
                };
                write!(f, "{} ", mark)?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
