//! # grid_replay
//!
//! Minimum-hop pathfinding on a 4-connected square grid with a movable set of obstacles and
//! fixed, protected start and goal cells. Paths are found with a
//! [uniform-cost search](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) whose frontier
//! breaks ties in insertion order, which makes it behave like a breadth-first search on the
//! unit-cost grid. [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! are tracked to reject unreachable goals without flood-filling.
//!
//! A found [Path] can be handed to a [PlaybackController], which replays it as a sequence of
//! [PlaybackEvent]s for an external renderer. [Simulation] wires the pieces together.
//!
//! ```
//! use grid_replay::{find_path, Coordinate, PathingGrid};
//!
//! let mut grid = PathingGrid::new(3, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();
//! grid.set_obstacle(Coordinate::new(1, 1), true).unwrap();
//! let path = find_path(&grid, grid.start(), grid.goal()).unwrap();
//! assert_eq!(path.len(), 4);
//! ```
pub mod config;
pub mod coordinate;
pub mod error;
pub mod path;
pub mod pathing_grid;
pub mod playback;
pub mod search;
pub mod simulation;
pub mod solver;

use std::time::Duration;

pub use config::SimulationConfig;
pub use coordinate::Coordinate;
pub use error::{ConfigError, Error, GridError, PlaybackError, SearchError};
pub use path::Path;
pub use pathing_grid::PathingGrid;
pub use playback::{PlaybackController, PlaybackEvent, PlaybackStatus};
pub use simulation::Simulation;
pub use solver::{find_path, GridSolver, UniformCostSolver};

/// Cost of a single axis-aligned move.
pub const MOVE_COST: u32 = 1;

/// Side length of the default square grid.
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Default pause between two replay ticks.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);
/// Shortest delay a [Simulation] accepts.
pub const MIN_DELAY: Duration = Duration::from_millis(100);
/// Longest delay a [Simulation] accepts.
pub const MAX_DELAY: Duration = Duration::from_millis(1000);
