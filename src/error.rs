//! Error types for grid mutation, search, playback and configuration.

use crate::playback::PlaybackStatus;
use crate::Coordinate;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate {coord} is outside the {size}x{size} grid")]
    InvalidCoordinate { coord: Coordinate, size: usize },
    /// The start and goal cells can never hold an obstacle.
    #[error("cell {0} is the start or goal and cannot be blocked")]
    ProtectedCell(Coordinate),
    #[error("grid must have at least one cell")]
    EmptyGrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid search configuration: {reason}")]
    InvalidConfiguration { reason: String },
    /// Every route between start and goal is blocked. This is an expected outcome, not a fault.
    #[error("no path from {start} to {goal}")]
    NotFound { start: Coordinate, goal: Coordinate },
}

impl SearchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("a replay is already in progress")]
    AlreadyRunning,
    #[error("no replay is running")]
    NotRunning,
    #[error("cannot {action} while {from:?}")]
    InvalidTransition {
        from: PlaybackStatus,
        action: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("{name} {coord} is outside the {size}x{size} grid")]
    OutOfRange {
        name: &'static str,
        coord: Coordinate,
        size: usize,
    },
    #[error("minimum delay {min:?} exceeds maximum delay {max:?}")]
    InvalidDelayBounds { min: Duration, max: Duration },
    #[error("delay {delay:?} is outside [{min:?}, {max:?}]")]
    DelayOutOfRange {
        delay: Duration,
        min: Duration,
        max: Duration,
    },
}

/// Umbrella error returned by [crate::Simulation].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether this is the "no path exists" outcome rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Search(e) if e.is_not_found())
    }
}
