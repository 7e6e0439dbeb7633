use std::collections::BTreeSet;

use super::*;

/// Replays a known mine layout, e.g. to reproduce a board or to script one in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(&mut self, config: &GameConfig) -> Result<Vec<Coord2>> {
        config.validate_mine_count()?;

        if self.mines.len() != usize::from(config.mines) {
            return Err(ConfigError::Placement("mine list length differs from mine count").into());
        }

        let (rows, cols) = config.size;
        if self.mines.iter().any(|&(row, col)| row >= rows || col >= cols) {
            return Err(ConfigError::Placement("mine outside of the board").into());
        }

        let unique: BTreeSet<_> = self.mines.iter().collect();
        if unique.len() != self.mines.len() {
            return Err(ConfigError::Placement("duplicated mine").into());
        }

        Ok(self.mines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_layout() {
        let config = GameConfig::new(3, 3, 2).unwrap();

        let mines = FixedMinePlacer::new([(0, 0), (2, 2)]).place(&config).unwrap();

        assert_eq!(mines, vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn rejects_duplicates_and_out_of_bounds() {
        let config = GameConfig::new(3, 3, 2).unwrap();

        assert!(FixedMinePlacer::new([(1, 1), (1, 1)]).place(&config).is_err());
        assert!(FixedMinePlacer::new([(1, 1), (3, 0)]).place(&config).is_err());
        assert!(FixedMinePlacer::new([(1, 1)]).place(&config).is_err());
    }
}
