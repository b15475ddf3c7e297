use crate::coord::{moore_neighborhood, Coord, LivingSet};

/// Queries about the neighborhood of cells in a world.
///
/// A [`Board`](crate::Board) asks its analyzer how many living neighbors a cell has,
/// and which dead cells border the living ones. The production implementation is
/// [`Moore`]. Other implementations can be injected with
/// [`Board::with_analyzer`](crate::Board::with_analyzer), e.g. to pin the neighbor
/// count in a test.
///
/// Implementations must not depend on earlier calls: the same arguments always give
/// the same answer.
pub trait NeighborAnalyzer {
    /// Number of living cells among the neighbors of `cell`.
    ///
    /// `cell` itself is never counted, whether or not it is alive.
    fn count_live_neighbors(&self, cell: Coord, world: &LivingSet) -> usize;

    /// All dead cells that are adjacent to at least one living cell.
    fn dead_neighbor_frontier(&self, world: &LivingSet) -> LivingSet;
}

impl<A: NeighborAnalyzer + ?Sized> NeighborAnalyzer for &A {
    fn count_live_neighbors(&self, cell: Coord, world: &LivingSet) -> usize {
        (**self).count_live_neighbors(cell, world)
    }

    fn dead_neighbor_frontier(&self, world: &LivingSet) -> LivingSet {
        (**self).dead_neighbor_frontier(world)
    }
}

/// The Moore neighborhood of radius 1: the 8 surrounding cells.
///
/// ```
/// use sparse_life_lib::{LivingSet, Moore, NeighborAnalyzer};
///
/// let world = LivingSet::from([(1, 2)]);
/// assert_eq!(Moore.count_live_neighbors((1, 1), &world), 1);
/// assert_eq!(Moore.dead_neighbor_frontier(&world).len(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Moore;

impl NeighborAnalyzer for Moore {
    fn count_live_neighbors(&self, cell: Coord, world: &LivingSet) -> usize {
        moore_neighborhood(cell)
            .filter(|neighbor| world.contains(neighbor))
            .count()
    }

    fn dead_neighbor_frontier(&self, world: &LivingSet) -> LivingSet {
        world
            .iter()
            .flat_map(|&cell| moore_neighborhood(cell))
            .filter(|neighbor| !world.contains(neighbor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_live_neighbors() {
        let world = LivingSet::from([(1, 2)]);
        assert_eq!(Moore.count_live_neighbors((1, 1), &world), 1);

        // The cell itself does not count.
        let world = LivingSet::from([(1, 1)]);
        assert_eq!(Moore.count_live_neighbors((1, 1), &world), 0);

        let full: LivingSet = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        assert_eq!(Moore.count_live_neighbors((1, 1), &full), 8);
        assert_eq!(Moore.count_live_neighbors((0, 0), &full), 3);
        assert_eq!(Moore.count_live_neighbors((-1, -1), &full), 1);
        assert_eq!(Moore.count_live_neighbors((5, 5), &full), 0);
    }

    #[test]
    fn test_empty_world_has_no_frontier() {
        assert_eq!(Moore.dead_neighbor_frontier(&LivingSet::new()), LivingSet::new());
    }

    #[test]
    fn test_single_cell_frontier() {
        let frontier = Moore.dead_neighbor_frontier(&LivingSet::from([(1, 1)]));
        assert_eq!(
            frontier.into_iter().collect::<Vec<_>>(),
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn test_adjacent_cells_frontier() {
        let frontier = Moore.dead_neighbor_frontier(&LivingSet::from([(1, 1), (1, 2)]));
        assert_eq!(
            frontier.into_iter().collect::<Vec<_>>(),
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 0),
                (1, 3),
                (2, 0),
                (2, 1),
                (2, 2),
                (2, 3),
            ]
        );
    }

    #[test]
    fn test_frontier_excludes_living_cells() {
        let world = LivingSet::from([(0, 0), (0, 1), (1, 0), (1, 1), (-4, 7)]);
        let frontier = Moore.dead_neighbor_frontier(&world);
        assert!(frontier.is_disjoint(&world));
        assert_eq!(frontier.len(), 12 + 8);
    }

    #[test]
    fn test_analyzer_by_reference() {
        let world = LivingSet::from([(0, 0), (0, 1)]);
        let analyzer = &Moore;
        assert_eq!(
            analyzer.count_live_neighbors((1, 0), &world),
            Moore.count_live_neighbors((1, 0), &world)
        );
        assert_eq!(
            analyzer.dead_neighbor_frontier(&world),
            Moore.dead_neighbor_frontier(&world)
        );
    }
}
