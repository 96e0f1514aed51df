/// Single board axis used for row and column positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Grid position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Bridges a grid position into an `ndarray` index.
pub(crate) const fn nd(coords: Coord2) -> [usize; 2] {
    [coords.0 as usize, coords.1 as usize]
}

pub(crate) const fn cell_area(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(cols as CellCount)
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the Moore neighborhood of `center`: the up to 8 positions around
/// it that stay inside a `bounds.0 x bounds.1` grid. Corner cells yield 3
/// neighbors, edge cells 5, interior cells all 8.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS.into_iter().filter_map(move |(row_offset, col_offset)| {
        let row = center.0.checked_add_signed(row_offset)?;
        let col = center.1.checked_add_signed(col_offset)?;
        (row < bounds.0 && col < bounds.1).then_some((row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let result = collected((0, 0), (3, 3));
        assert_eq!(result, vec![(0, 1), (1, 0), (1, 1)]);

        assert_eq!(collected((2, 2), (3, 3)).len(), 3);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let result = collected((0, 1), (3, 3));
        assert_eq!(result.len(), 5);
        assert!(result.contains(&(0, 0)));
        assert!(result.contains(&(1, 2)));
        assert!(!result.contains(&(0, 1)));
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(collected((1, 1), (3, 3)).len(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(collected((0, 0), (1, 1)).is_empty());
    }
}
