use ndarray::Array2;

use crate::GameConfig;
use crate::generator::MineGenerator;
use crate::types::CellCount;

/// Uniform random placement: coordinates are drawn and redrawn on collision
/// until exactly the requested number of distinct cells hold mines. The
/// first opened cell is not excluded and may hold a mine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool> {
        use rand::prelude::*;

        let size = usize::from(config.grid_size);
        let capacity = config.total_cells();

        let mut mines = config.mine_count;
        if mines >= capacity {
            mines = capacity.saturating_sub(1);
            log::warn!(
                "requested {} mines but the grid holds at most {}, clamped",
                config.mine_count,
                mines
            );
        }

        let mut mask = Array2::from_elem((size, size), false);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < mines {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            if mask[[row, col]] {
                continue;
            }
            mask[[row, col]] = true;
            placed += 1;
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_count(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&mine| mine).count()
    }

    #[test]
    fn places_exactly_the_requested_mine_count() {
        let config = GameConfig::new(16, 40);
        let mask = RandomMineGenerator::new(7).generate(config);

        assert_eq!(mask.dim(), (16, 16));
        assert_eq!(mine_count(&mask), 40);
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = GameConfig::new(16, 40);
        let first = RandomMineGenerator::new(7).generate(config);
        let second = RandomMineGenerator::new(7).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = GameConfig::new(16, 40);
        let first = RandomMineGenerator::new(7).generate(config);
        let second = RandomMineGenerator::new(8).generate(config);

        assert_ne!(first, second);
    }

    #[test]
    fn over_capacity_request_leaves_one_safe_cell() {
        let config = GameConfig::new_unchecked(3, 20);
        let mask = RandomMineGenerator::new(1).generate(config);

        assert_eq!(mine_count(&mask), 8);
    }
}
