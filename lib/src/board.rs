use crate::{
    coord::{Coord, LivingSet},
    error::StepError,
    neighbor::{Moore, NeighborAnalyzer},
};

/// A Game of Life board on an unbounded grid.
///
/// Only living cells are stored. The board owns a [`NeighborAnalyzer`], chosen once at
/// construction, which it consults to advance generations. [`Board::new`] and
/// [`Board::from_cells`] use the [`Moore`] analyzer, i.e. Conway's Game of Life.
///
/// # Example
///
/// ```
/// use sparse_life_lib::{Board, LivingSet};
///
/// // A blinker oscillates with period 2.
/// let mut board = Board::from_cells([(1, 0), (1, 1), (1, 2)]);
/// board.step();
/// assert_eq!(board.living_members(), LivingSet::from([(0, 1), (1, 1), (2, 1)]));
/// board.step();
/// assert_eq!(board.living_members(), LivingSet::from([(1, 0), (1, 1), (1, 2)]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board<A = Moore> {
    /// The living cells of the current generation.
    living: LivingSet,

    /// Answers neighborhood queries while stepping.
    analyzer: A,
}

impl Board {
    /// Create an empty board.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board whose living cells are `cells`.
    ///
    /// Duplicates are ignored.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self::with_analyzer(cells, Moore)
    }
}

impl FromIterator<Coord> for Board {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl<A: NeighborAnalyzer> Board<A> {
    /// Create a board whose living cells are `cells`, stepped with `analyzer`.
    pub fn with_analyzer(cells: impl IntoIterator<Item = Coord>, analyzer: A) -> Self {
        Self {
            living: cells.into_iter().collect(),
            analyzer,
        }
    }

    /// A snapshot of the living cells.
    ///
    /// The returned set is a copy; it is not affected by later steps.
    pub fn living_members(&self) -> LivingSet {
        self.living.clone()
    }

    /// The living cells, borrowed.
    #[inline]
    pub const fn living(&self) -> &LivingSet {
        &self.living
    }

    /// Consume the board and return its living cells.
    #[inline]
    pub fn into_living(self) -> LivingSet {
        self.living
    }

    /// The analyzer used to step the board.
    #[inline]
    pub const fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Number of living cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.living.len()
    }

    /// Whether there are no living cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.living.is_empty()
    }

    /// Whether the cell at `cell` is alive.
    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        self.living.contains(&cell)
    }

    /// Advance the board by one generation.
    ///
    /// The next generation is built in two passes, both counting neighbors in the
    /// current generation:
    ///
    /// 1. A living cell with exactly 2 living neighbors survives.
    /// 2. Every living cell and every dead cell on the frontier is checked again:
    ///    with exactly 3 living neighbors, it is alive in the next generation.
    ///
    /// Together this gives the usual rule: a living cell survives with 2 or 3
    /// neighbors, and a dead cell is born with exactly 3.
    pub fn step(&mut self) {
        let world = &self.living;
        let mut next = LivingSet::new();

        for &cell in world {
            if self.analyzer.count_live_neighbors(cell, world) == 2 {
                next.insert(cell);
            }
        }

        let mut candidates = self.analyzer.dead_neighbor_frontier(world);
        log::trace!("Dead neighbor frontier: {} cells", candidates.len());
        candidates.extend(world.iter().copied());

        for cell in candidates {
            if self.analyzer.count_live_neighbors(cell, world) == 3 {
                next.insert(cell);
            }
        }

        log::debug!("Population: {} -> {}", world.len(), next.len());
        self.living = next;
    }

    /// Advance the board by `times` generations.
    ///
    /// Stepping 0 times does nothing.
    pub fn step_n(&mut self, times: usize) {
        for _ in 0..times {
            self.step();
        }
    }

    /// Advance the board by `times` generations, where `times` comes from a signed source.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NegativeCount`] if `times` is negative. The board is unchanged
    /// in that case.
    ///
    /// ```
    /// use sparse_life_lib::{Board, StepError};
    ///
    /// let mut board = Board::from_cells([(0, 0)]);
    /// assert_eq!(board.try_step_n(-1), Err(StepError::NegativeCount(-1)));
    /// assert!(board.contains((0, 0)));
    /// ```
    pub fn try_step_n(&mut self, times: i64) -> Result<(), StepError> {
        if times < 0 {
            return Err(StepError::NegativeCount(times));
        }

        for _ in 0..times {
            self.step();
        }

        Ok(())
    }
}
