use crate::Coordinate;
use itertools::Itertools;

/// A route over the grid. The steps exclude the start and end at the goal, so that each step is
/// one move of a replay. The trivial route from a cell to itself is the single step `[goal]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    start: Coordinate,
    steps: Vec<Coordinate>,
}

impl Path {
    pub fn new(start: Coordinate, steps: Vec<Coordinate>) -> Path {
        Path { start, steps }
    }

    /// The trivial path of a search whose start is its goal.
    pub fn trivial(goal: Coordinate) -> Path {
        Path::new(goal, vec![goal])
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goal(&self) -> Coordinate {
        self.steps.last().copied().unwrap_or(self.start)
    }

    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Coordinate> {
        self.steps
    }

    /// Number of steps, which equals the number of moves except for the trivial path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of moves needed to walk the path.
    pub fn hops(&self) -> usize {
        if self.is_trivial() {
            0
        } else {
            self.steps.len()
        }
    }

    pub fn is_trivial(&self) -> bool {
        self.steps.len() == 1 && self.steps[0] == self.start
    }

    /// Start followed by every step.
    pub fn cells(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        let skip = usize::from(self.is_trivial());
        std::iter::once(&self.start).chain(self.steps.iter().skip(skip))
    }

    /// Whether each move goes to a 4-adjacent cell.
    pub fn is_contiguous(&self) -> bool {
        self.cells().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
