use smallvec::SmallVec;

use crate::{pathing_grid::PathingGrid, solver::GridSolver, Coordinate};

/// Expands nodes strictly by accumulated cost, so on the unit-cost grid it finds minimum-hop
/// paths in breadth-first order.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCostSolver;

impl GridSolver for UniformCostSolver {
    type Successors = SmallVec<[(Coordinate, u32); 4]>;

    fn successors(&self, grid: &PathingGrid, node: &Coordinate) -> Self::Successors {
        grid.neighborhood_points(node)
            .into_iter()
            .map(|n| (n, self.cost(node, &n)))
            .collect()
    }
}
