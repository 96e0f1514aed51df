use serde::{Deserialize, Serialize};

use crate::types::{Coord, Coord2};

/// A single grid position's puzzle state, owned by the board.
///
/// The identity fields are fixed at creation; everything else is mutated by
/// the board through its open and flag operations only.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    row: Coord,
    col: Coord,
    pub(crate) has_mine: bool,
    pub(crate) has_opened: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighboring_mine_count: u8,
}

impl Cell {
    pub(crate) const fn new(row: Coord, col: Coord) -> Self {
        Self {
            row,
            col,
            has_mine: false,
            has_opened: false,
            is_flagged: false,
            neighboring_mine_count: 0,
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn has_opened(&self) -> bool {
        self.has_opened
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mines among this cell's Moore neighbors, 0 to 8.
    pub const fn neighboring_mine_count(&self) -> u8 {
        self.neighboring_mine_count
    }
}
