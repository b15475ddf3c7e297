//! Conway's Game of Life on an unbounded grid.
//!
//! Only living cells are stored, so the board has no edges and no wraparound.
//! A [`Board`] advances generations with the help of a [`NeighborAnalyzer`],
//! which counts living neighbors and finds the dead cells bordering the population.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod board;
mod config;
mod coord;
mod error;
mod neighbor;

pub use board::Board;
pub use config::Config;
pub use coord::{moore_neighborhood, parse_coord, Coord, LivingSet};
pub use error::{ConfigError, ParseCoordError, StepError};
pub use neighbor::{Moore, NeighborAnalyzer};
