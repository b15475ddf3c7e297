use crate::{
    board::Board,
    coord::{parse_coord, Coord},
    error::{ConfigError, ParseCoordError},
};
#[cfg(feature = "clap")]
use clap::Args;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The configuration of a run: an initial population and how far to advance it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// A living cell of the initial population, written as `ROW,COL`.
    ///
    /// May be given several times. Duplicates are ignored.
    ///
    /// The word after `--cell` is always read as the coordinate, even if it starts with `-`.
    /// So `--cell -1,2` works, but `--cell --each` reads `--each` as a malformed coordinate.
    /// `--cell=-1,2` is unambiguous.
    #[cfg_attr(
        feature = "clap",
        arg(short, long = "cell", value_name = "ROW,COL", value_parser = parse_coord, allow_hyphen_values = true)
    )]
    pub cells: Vec<Coord>,

    /// Number of generations to advance.
    ///
    /// Must not be negative.
    #[cfg_attr(
        feature = "clap",
        arg(short, long, allow_negative_numbers = true, default_value = "1")
    )]
    pub generations: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Config {
    /// Create a new configuration that advances `cells` by one generation.
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            generations: 1,
        }
    }

    /// Set the number of generations.
    ///
    /// See [`generations`](Config::generations) for more details.
    #[inline]
    pub const fn with_generations(mut self, generations: i64) -> Self {
        self.generations = generations;
        self
    }

    /// Add a living cell to the initial population.
    #[inline]
    pub fn with_cell(mut self, cell: Coord) -> Self {
        self.cells.push(cell);
        self
    }

    /// Parse a cell written as `ROW,COL` and add it to the initial population.
    ///
    /// Malformed cells are reported as [`ParseCoordError`].
    pub fn with_cell_str(self, s: &str) -> Result<Self, ParseCoordError> {
        Ok(self.with_cell(parse_coord(s)?))
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        if self.generations < 0 {
            return Err(ConfigError::NegativeGenerations);
        }

        Ok(self)
    }

    /// Create a board holding the initial population.
    pub fn board(&self) -> Board {
        Board::from_cells(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LivingSet;

    #[test]
    fn test_builder() {
        let config = Config::new([(1, 0), (1, 1)])
            .with_cell((1, 2))
            .with_generations(2);
        assert_eq!(config.cells, vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(config.generations, 2);
        assert_eq!(Config::default().generations, 1);
        assert!(Config::default().cells.is_empty());
    }

    #[test]
    fn test_with_cell_str() {
        let config = Config::default().with_cell_str("-1, 4").unwrap();
        assert_eq!(config.cells, vec![(-1, 4)]);
        assert_eq!(Config::default().with_cell_str("-1 4"), Err(ParseCoordError));
    }

    #[test]
    fn test_check() {
        assert!(Config::new([(0, 0)]).with_generations(0).check().is_ok());
        assert!(Config::new([(0, 0)]).with_generations(100).check().is_ok());
        assert_eq!(
            Config::new([(0, 0)]).with_generations(-1).check(),
            Err(ConfigError::NegativeGenerations)
        );
    }

    #[test]
    fn test_board() {
        let config = Config::new([(1, 1), (1, 1), (1, 2), (1, 0)]).with_generations(3);
        let mut board = config.board();
        assert_eq!(board.population(), 3);
        board.try_step_n(config.generations).unwrap();
        assert_eq!(board.living_members(), LivingSet::from([(0, 1), (1, 1), (2, 1)]));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_config_serde_roundtrip() {
        let config = Config::new([(1, 2), (-3, 4)]).with_generations(7);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"cells":[[1,2],[-3,4]],"generations":7}"#);
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
