use crate::error::GridError;
use crate::Coordinate;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] holds the obstacle state of a square grid in a [BoolGrid], where a cell is
/// either blocked ([true]) or free ([false]). The start and goal cells are fixed at construction
/// and can never be blocked. Connected components of free cells are tracked in a [UnionFind]
/// so that searches between disconnected cells can be rejected without flood-filling.
///
/// A search only ever borrows the grid immutably; [snapshot](Self::snapshot) gives an
/// independent copy when the grid has to be searched elsewhere while it keeps being edited.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    grid: BoolGrid,
    size: usize,
    start: Coordinate,
    goal: Coordinate,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl PathingGrid {
    /// Creates an obstacle-free `size`x`size` grid with protected start and goal cells.
    pub fn new(size: usize, start: Coordinate, goal: Coordinate) -> Result<PathingGrid, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        for coord in [start, goal] {
            if !coord.in_bounds(size) {
                return Err(GridError::InvalidCoordinate { coord, size });
            }
        }
        let mut pathing_grid = PathingGrid {
            grid: BoolGrid::new(size, size, false),
            size,
            start,
            goal,
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn start(&self) -> Coordinate {
        self.start
    }
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Whether the cell is the start or the goal.
    pub fn is_protected(&self, coord: &Coordinate) -> bool {
        *coord == self.start || *coord == self.goal
    }

    pub fn in_bounds(&self, coord: &Coordinate) -> bool {
        coord.in_bounds(self.size)
    }

    fn check(&self, coord: &Coordinate) -> Result<(), GridError> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate {
                coord: *coord,
                size: self.size,
            })
        }
    }

    fn ix(&self, coord: &Coordinate) -> usize {
        coord.row as usize * self.size + coord.col as usize
    }

    pub fn is_blocked(&self, coord: Coordinate) -> Result<bool, GridError> {
        self.check(&coord)?;
        Ok(self.grid.get_point(Point::from(coord)))
    }

    /// In bounds and not blocked.
    pub fn can_move_to(&self, coord: &Coordinate) -> bool {
        self.in_bounds(coord) && !self.grid.get_point(Point::from(*coord))
    }

    /// Sets the obstacle flag of a cell. Blocking may split a component, so it only flags the
    /// components as dirty; unblocking joins the cell with its free neighbours right away.
    pub fn set_obstacle(&mut self, coord: Coordinate, blocked: bool) -> Result<(), GridError> {
        self.check(&coord)?;
        if self.is_protected(&coord) {
            return Err(GridError::ProtectedCell(coord));
        }
        let point = Point::from(coord);
        if self.grid.get_point(point) == blocked {
            return Ok(());
        }
        if blocked {
            self.components_dirty = true;
        } else {
            let ix = self.ix(&coord);
            for n in self.neighborhood_points(&coord) {
                let n_ix = self.ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.grid.set_point(point, blocked);
        debug!("Cell {} is now {}", coord, if blocked { "blocked" } else { "free" });
        Ok(())
    }

    /// Flips the obstacle flag of a cell and returns the new flag. Start and goal are silently
    /// left free.
    pub fn toggle(&mut self, coord: Coordinate) -> Result<bool, GridError> {
        let blocked = !self.is_blocked(coord)?;
        match self.set_obstacle(coord, blocked) {
            Ok(()) => Ok(blocked),
            Err(GridError::ProtectedCell(_)) => {
                debug!("Ignoring toggle of protected cell {}", coord);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// The free, in-bounds cells sharing an edge with `coord`, ordered down, up, right, left.
    pub fn neighbors(&self, coord: Coordinate) -> Result<SmallVec<[Coordinate; 4]>, GridError> {
        self.check(&coord)?;
        Ok(self.neighborhood_points(&coord))
    }

    /// Unchecked variant of [neighbors](Self::neighbors) used during search.
    pub(crate) fn neighborhood_points(&self, coord: &Coordinate) -> SmallVec<[Coordinate; 4]> {
        coord
            .neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    /// Clears every obstacle.
    pub fn reset(&mut self) {
        self.grid = BoolGrid::new(self.size, self.size, false);
        self.generate_components();
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells().filter(|c| !self.can_move_to(c)).count()
    }

    fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// An independent copy of the grid that later edits to `self` do not affect.
    pub fn snapshot(&self) -> PathingGrid {
        self.clone()
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Retrieves the component id a given [Coordinate] belongs to.
    pub fn get_component(&self, coord: &Coordinate) -> Result<usize, GridError> {
        self.check(coord)?;
        Ok(self.components.find(self.ix(coord)))
    }

    /// Checks if start and goal are on the same component. Only meaningful while the components
    /// are not dirty.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.size * self.size);
        self.components_dirty = false;
        let cells = self.cells().filter(|c| self.can_move_to(c)).collect::<Vec<_>>();
        for cell in cells {
            let ix = self.ix(&cell);
            // Down and right suffice, the other two edges are added from the other side.
            for n in [cell.offset(1, 0), cell.offset(0, 1)] {
                if self.can_move_to(&n) {
                    let n_ix = self.ix(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size as i32 {
            let line = (0..self.size as i32)
                .map(|col| {
                    let c = Coordinate::new(row, col);
                    if c == self.start {
                        'S'
                    } else if c == self.goal {
                        'G'
                    } else if self.can_move_to(&c) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
