use crate::error::SearchError;
use crate::path::Path;
use crate::pathing_grid::PathingGrid;
use crate::search::uniform_cost_search;
use crate::{Coordinate, MOVE_COST};
use itertools::Itertools;
use log::{debug, info, warn};

pub mod uniform_cost;

pub use uniform_cost::UniformCostSolver;

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Coordinate, u32)>;

    fn successors(&self, grid: &PathingGrid, node: &Coordinate) -> Self::Successors;

    /// Uses [MOVE_COST] per axis-aligned step.
    fn cost(&self, p1: &Coordinate, p2: &Coordinate) -> u32 {
        p1.manhattan_distance(p2) as u32 * MOVE_COST
    }

    fn path_cost(&self, path: &Path) -> u32 {
        path.cells()
            .tuple_windows()
            .map(|(a, b)| self.cost(a, b))
            .sum()
    }

    /// Computes a minimum-cost path from start to goal. Fails with
    /// [SearchError::InvalidConfiguration] if either end is off the grid or blocked, and with
    /// [SearchError::NotFound] if no route exists.
    fn find_path(
        &self,
        grid: &PathingGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Path, SearchError> {
        validate_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok(Path::trivial(goal));
        }
        // Check if start and goal are on the same connected component.
        if !grid.components_dirty() && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(SearchError::NotFound { start, goal });
        }
        info!("Computing path from {} to {}", start, goal);
        match uniform_cost_search(
            &start,
            |node| self.successors(grid, node),
            |node| *node == goal,
        ) {
            Some((mut cells, cost)) => {
                debug!("Found path of cost {} through {} cells", cost, cells.len());
                cells.remove(0);
                Ok(Path::new(start, cells))
            }
            None => {
                if !grid.components_dirty() {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                Err(SearchError::NotFound { start, goal })
            }
        }
    }
}

fn validate_endpoints(
    grid: &PathingGrid,
    start: Coordinate,
    goal: Coordinate,
) -> Result<(), SearchError> {
    for (name, coord) in [("start", start), ("goal", goal)] {
        if !grid.in_bounds(&coord) {
            return Err(SearchError::InvalidConfiguration {
                reason: format!(
                    "{} {} is outside the {}x{} grid",
                    name,
                    coord,
                    grid.size(),
                    grid.size()
                ),
            });
        }
        if !grid.can_move_to(&coord) {
            return Err(SearchError::InvalidConfiguration {
                reason: format!("{} {} is blocked", name, coord),
            });
        }
    }
    Ok(())
}

/// Finds a minimum-hop path with [UniformCostSolver].
pub fn find_path(
    grid: &PathingGrid,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Path, SearchError> {
    UniformCostSolver.find_path(grid, start, goal)
}
