use crate::config::SimulationConfig;
use crate::error::{Error, PlaybackError};
use crate::path::Path;
use crate::pathing_grid::PathingGrid;
use crate::playback::{PlaybackController, PlaybackEvent, PlaybackStatus};
use crate::solver::{GridSolver, UniformCostSolver};
use crate::Coordinate;
use log::info;
use std::time::Duration;

/// Ties a [PathingGrid], a [GridSolver] and a [PlaybackController] together behind the actions
/// a front end exposes: toggling cells, starting a search, pausing, changing the speed and
/// resetting.
#[derive(Clone, Debug)]
pub struct Simulation<S: GridSolver = UniformCostSolver> {
    config: SimulationConfig,
    grid: PathingGrid,
    controller: PlaybackController,
    solver: S,
}

impl Simulation<UniformCostSolver> {
    pub fn new(config: SimulationConfig) -> Result<Self, Error> {
        Simulation::with_solver(config, UniformCostSolver)
    }
}

impl<S: GridSolver> Simulation<S> {
    pub fn with_solver(config: SimulationConfig, solver: S) -> Result<Self, Error> {
        config.validate()?;
        let grid = PathingGrid::new(config.size, config.start, config.goal)?;
        let controller = PlaybackController::new(config.delay);
        Ok(Simulation {
            config,
            grid,
            controller,
            solver,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn status(&self) -> PlaybackStatus {
        self.controller.status()
    }

    /// Flips an obstacle. Start and goal are ignored and stay free.
    pub fn toggle(&mut self, coord: Coordinate) -> Result<bool, Error> {
        Ok(self.grid.toggle(coord)?)
    }

    /// Searches from start to goal on the current grid and begins replaying the result.
    /// A finished or cancelled replay is discarded first; an active one is left alone and
    /// reported as [PlaybackError::AlreadyRunning].
    pub fn start(&mut self) -> Result<Path, Error> {
        if self.controller.status().is_active() {
            return Err(PlaybackError::AlreadyRunning.into());
        }
        if self.controller.status().is_terminal() {
            self.controller.reset()?;
        }
        self.grid.update();
        let path = self
            .solver
            .find_path(&self.grid, self.grid.start(), self.grid.goal())?;
        info!("Replaying path of {} moves", path.hops());
        self.controller.start(&path, self.controller.delay())?;
        Ok(path)
    }

    pub fn tick(&mut self) -> Result<PlaybackEvent, Error> {
        Ok(self.controller.tick()?)
    }

    pub fn pause(&mut self) -> Result<(), Error> {
        Ok(self.controller.pause()?)
    }

    pub fn resume(&mut self) -> Result<(), Error> {
        Ok(self.controller.resume()?)
    }

    pub fn toggle_pause(&mut self) -> Result<PlaybackStatus, Error> {
        Ok(self.controller.toggle_pause()?)
    }

    pub fn cancel(&mut self) -> Result<PlaybackEvent, Error> {
        Ok(self.controller.cancel()?)
    }

    pub fn delay(&self) -> Duration {
        self.controller.delay()
    }

    /// Sets the replay delay, clamped to the configured bounds, and returns the value applied.
    pub fn set_delay(&mut self, delay: Duration) -> Duration {
        let delay = self.config.clamp_delay(delay);
        self.controller.set_delay(delay);
        delay
    }

    /// Cancels an active replay, clears every obstacle and returns the controller to idle.
    /// Returns the cancellation event if a replay was interrupted.
    pub fn reset(&mut self) -> Result<Option<PlaybackEvent>, Error> {
        let cancelled = if self.controller.status().is_active() {
            Some(self.controller.cancel()?)
        } else {
            None
        };
        self.controller.reset()?;
        self.grid.reset();
        Ok(cancelled)
    }
}
