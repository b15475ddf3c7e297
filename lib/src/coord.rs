use crate::error::ParseCoordError;
use std::collections::BTreeSet;

/// Coordinates of a cell on the board, as `(row, column)`.
///
/// Coordinates are compared lexicographically, first by row and then by column.
/// The order only makes enumeration deterministic; it has no meaning for the rules.
pub type Coord = (i64, i64);

/// The set of all living cells.
///
/// Dead cells are not stored. A coordinate that is not in the set is dead.
pub type LivingSet = BTreeSet<Coord>;

/// Offsets of the Moore neighborhood of radius 1, in lexicographic order.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 8 cells at Chebyshev distance 1 from `cell`.
///
/// The cell itself is not included. Neighbors that would fall outside the range
/// of [`i64`] are skipped.
///
/// ```
/// use sparse_life_lib::moore_neighborhood;
///
/// let neighbors: Vec<_> = moore_neighborhood((0, 0)).collect();
/// assert_eq!(neighbors.len(), 8);
/// assert_eq!(neighbors[0], (-1, -1));
/// assert_eq!(neighbors[7], (1, 1));
/// ```
pub fn moore_neighborhood(cell: Coord) -> impl Iterator<Item = Coord> {
    let (row, col) = cell;
    MOORE_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
}

/// Parse a coordinate written as `ROW,COL`.
///
/// Whitespace around either number is ignored.
///
/// ```
/// use sparse_life_lib::parse_coord;
///
/// assert_eq!(parse_coord("1,2"), Ok((1, 2)));
/// assert_eq!(parse_coord(" -3 , 4 "), Ok((-3, 4)));
/// assert!(parse_coord("1;2").is_err());
/// ```
pub fn parse_coord(s: &str) -> Result<Coord, ParseCoordError> {
    let (row, col) = s.split_once(',').ok_or(ParseCoordError)?;
    let row = row.trim().parse().map_err(|_| ParseCoordError)?;
    let col = col.trim().parse().map_err(|_| ParseCoordError)?;
    Ok((row, col))
}
