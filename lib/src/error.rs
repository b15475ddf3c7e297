use thiserror::Error;

/// An error that can occur when parsing a coordinate.
///
/// A coordinate is written as `ROW,COL`, where both parts are integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Invalid coordinate, expected `ROW,COL`")]
pub struct ParseCoordError;

/// An error that can occur when stepping a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StepError {
    /// The number of generations to advance is negative.
    #[error("Cannot step a negative number of generations: {0}")]
    NegativeCount(i64),
}

/// An error that can occur when checking a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The number of generations is negative.
    #[error("The number of generations is negative")]
    NegativeGenerations,
}
