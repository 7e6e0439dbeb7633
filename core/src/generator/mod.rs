use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses where the mines of a new board go.
pub trait MinePlacer {
    /// Returns exactly `config.mines` distinct in-bounds coordinates.
    fn place(&mut self, config: &GameConfig) -> Result<Vec<Coord2>>;
}

impl<P: MinePlacer + ?Sized> MinePlacer for &mut P {
    fn place(&mut self, config: &GameConfig) -> Result<Vec<Coord2>> {
        (**self).place(config)
    }
}

/// Places `config.mines` mines uniformly at random using `rng`.
pub fn place_mines<R: rand::Rng>(config: &GameConfig, rng: R) -> Result<Vec<Coord2>> {
    RandomMinePlacer::new(rng).place(config)
}
