use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// Row and column offsets of the 4-neighbourhood in search order: down, up, right, left.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A cell on the grid, addressed by row and column. Signed so that off-grid positions can be
/// represented and rejected instead of wrapping around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    /// Whether both components lie in `[0, size)`.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Coordinate {
        Coordinate::new(self.row + d_row, self.col + d_col)
    }

    /// The four axis-aligned neighbours in search order, regardless of bounds.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| self.offset(d_row, d_col))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`, so that a [grid_util::grid::BoolGrid] prints row by row.
impl From<Coordinate> for Point {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.col, coord.row)
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Coordinate::new(point.y, point.x)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
