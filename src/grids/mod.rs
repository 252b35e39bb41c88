pub mod cell_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Canonical direction order, used when seeding the frontier from the
/// origin cell.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::North,
    Direction::South,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Grid offset of one move in this direction. North is up, so y
    /// decreases toward it.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
            Direction::South => (0, 1),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

/// Passage flags for one grid cell. A flag means "a passage exists from
/// this cell toward that neighbor"; flags are only ever set, never cleared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub east: bool,
    pub west: bool,
    pub north: bool,
    pub south: bool,
}

impl Cell {
    pub fn has_passage(&self, direction: Direction) -> bool {
        match direction {
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::North => self.north,
            Direction::South => self.south,
        }
    }

    /// A cell counts as visited once any passage touches it.
    pub fn is_visited(&self) -> bool {
        self.east || self.west || self.north || self.south
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        match direction {
            Direction::East => self.east = true,
            Direction::West => self.west = true,
            Direction::North => self.north = true,
            Direction::South => self.south = true,
        }
    }
}
