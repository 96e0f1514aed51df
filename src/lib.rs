use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use scoreboard::*;
pub use session::*;
pub use timer::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod scoreboard;
mod session;
mod timer;
mod types;

/// Board parameters: a square grid and the number of mines on it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: Coord,
    pub mine_count: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(grid_size: Coord, mine_count: CellCount) -> Self {
        Self {
            grid_size,
            mine_count,
        }
    }

    /// Clamps into a playable range: at least a 2x2 grid, and between one
    /// mine and one fewer than the number of cells, so at least one safe
    /// cell always exists and the win condition stays reachable.
    pub fn new(grid_size: Coord, mine_count: CellCount) -> Self {
        let grid_size = grid_size.max(2);
        let mine_count = mine_count.clamp(1, cell_area(grid_size, grid_size) - 1);
        Self::new_unchecked(grid_size, mine_count)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_area(self.grid_size, self.grid_size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_into_a_playable_range() {
        let config = GameConfig::new(3, 100);
        assert_eq!(config.mine_count, 8);

        let config = GameConfig::new(0, 0);
        assert_eq!(config.grid_size, 2);
        assert_eq!(config.mine_count, 1);
    }

    #[test]
    fn config_derives_cell_counts() {
        let config = GameConfig::new(5, 10);
        assert_eq!(config.total_cells(), 25);
        assert_eq!(config.safe_cell_count(), 15);
    }
}
