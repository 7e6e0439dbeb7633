use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform mine placement over an injected random source.
///
/// Uses a partial Fisher-Yates shuffle over the linear cell indices, so every subset of `mines` cells is equally
/// likely and generation always finishes in `O(rows * cols)`.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer<R> {
    rng: R,
}

impl<R: Rng> RandomMinePlacer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomMinePlacer<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MinePlacer for RandomMinePlacer<R> {
    fn place(&mut self, config: &GameConfig) -> Result<Vec<Coord2>> {
        config.validate_mine_count()?;

        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines);
        let cols = usize::from(config.cols());

        let mut cells: Vec<usize> = (0..total_cells).collect();
        for i in 0..mines {
            let j = self.rng.random_range(i..total_cells);
            cells.swap(i, j);
        }

        let coords: Vec<Coord2> = cells[..mines]
            .iter()
            .map(|&index| {
                // both quotient and remainder are bounded by `Coord` dimensions
                ((index / cols) as Coord, (index % cols) as Coord)
            })
            .collect();

        log::debug!(
            "Placed {} mines on a {}x{} board",
            coords.len(),
            config.rows(),
            config.cols()
        );
        log::trace!("Mine coordinates: {:?}", coords);
        Ok(coords)
    }
}
