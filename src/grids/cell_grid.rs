use crate::grids::{Cell, Dimensions, Direction};

/// A `width x height` grid of passage-flag cells, allocated once with every
/// flag false. Passages between adjacent cells are always mirrored: carving
/// east from `(x, y)` also carves west on `(x + 1, y)`, in the same call.
pub struct CellGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be at least 1x1"
        );

        Self {
            cells: vec![Cell::default(); width * height],
            dims: Dimensions { width, height },
        }
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        (self.dims.width * y) + x
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index_of(x, y)]
    }

    /// All cells in row-major order, row `y` starting at index `y * width`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinate one move from `(x, y)`, or `None` if that move leaves
    /// the grid.
    pub fn neighbor_of(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x as isize + dx;
        let ny = y as isize + dy;

        if nx < 0 || nx >= self.dims.width as isize || ny < 0 || ny >= self.dims.height as isize {
            return None;
        }

        Some((nx as usize, ny as usize))
    }

    /// Opens the passage from `(x, y)` toward `direction`, and the mirrored
    /// passage on the neighboring cell. Both flags are set together.
    pub fn carve(&mut self, x: usize, y: usize, direction: Direction) {
        let (nx, ny) = self
            .neighbor_of(x, y, direction)
            .expect("carve target out of bounds");

        let from = self.index_of(x, y);
        let to = self.index_of(nx, ny);

        self.cells[from].open(direction);
        self.cells[to].open(-direction);
    }

    /// Plain-text rendering, one row per grid row: `_`/space by the south
    /// flag, `|`/space by the east flag, leading `|` per row. Debug aid only.
    pub fn ascii(&self) -> String {
        let mut s = String::new();

        for y in 0..self.dims.height {
            s.push('|');
            for x in 0..self.dims.width {
                let cell = self.cell(x, y);
                s.push(if cell.south { ' ' } else { '_' });
                s.push(if cell.east { ' ' } else { '|' });
            }
            s.push('\n');
        }

        s
    }
}

#[cfg(test)]
mod test_cell_grid {
    use super::*;

    #[test]
    fn carving_mirrors_both_flags() {
        let mut grid = CellGrid::with_dims(3, 3);

        grid.carve(1, 1, Direction::East);

        assert!(grid.cell(1, 1).east);
        assert!(grid.cell(2, 1).west);
        assert!(!grid.cell(1, 1).west);
        assert!(!grid.cell(2, 1).east);

        grid.carve(1, 1, Direction::North);

        assert!(grid.cell(1, 1).north);
        assert!(grid.cell(1, 0).south);
    }

    #[test]
    fn visited_once_any_flag_set() {
        let mut grid = CellGrid::with_dims(2, 2);

        assert!(!grid.cell(0, 0).is_visited());
        assert!(!grid.cell(1, 0).is_visited());

        grid.carve(0, 0, Direction::East);

        assert!(grid.cell(0, 0).is_visited());
        assert!(grid.cell(1, 0).is_visited());
        assert!(!grid.cell(0, 1).is_visited());
    }

    #[test]
    fn neighbor_lookup_rejects_edges() {
        let grid = CellGrid::with_dims(2, 2);

        assert_eq!(grid.neighbor_of(0, 0, Direction::West), None);
        assert_eq!(grid.neighbor_of(0, 0, Direction::North), None);
        assert_eq!(grid.neighbor_of(1, 1, Direction::East), None);
        assert_eq!(grid.neighbor_of(1, 1, Direction::South), None);

        assert_eq!(grid.neighbor_of(0, 0, Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor_of(0, 0, Direction::South), Some((0, 1)));
        assert_eq!(grid.neighbor_of(1, 1, Direction::West), Some((0, 1)));
        assert_eq!(grid.neighbor_of(1, 1, Direction::North), Some((1, 0)));
    }

    #[test]
    fn ascii_rendering() {
        let mut grid = CellGrid::with_dims(2, 2);

        grid.carve(0, 0, Direction::East);
        grid.carve(0, 0, Direction::South);

        assert_eq!(grid.ascii(), "|  _|\n|_|_|\n");
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_width_is_rejected() {
        CellGrid::with_dims(0, 5);
    }
}
