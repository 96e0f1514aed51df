use ndarray::Array2;

use crate::GameConfig;
use crate::types::{Coord2, nd};

pub use random::*;

mod random;

/// Produces the mine mask a board is built from: a `grid_size x grid_size`
/// array with `true` at every mined position.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool>;
}

/// Places mines at explicit coordinates, for tests and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool> {
        let size = usize::from(config.grid_size);
        let mut mask = Array2::from_elem((size, size), false);

        for coords in self.mines {
            if coords.0 < config.grid_size && coords.1 < config.grid_size {
                mask[nd(coords)] = true;
            } else {
                log::warn!(
                    "mine at {:?} falls outside the {}x{} grid, skipped",
                    coords,
                    config.grid_size,
                    config.grid_size
                );
            }
        }

        mask
    }
}
