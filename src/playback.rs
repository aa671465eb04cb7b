//! Replay of a computed [Path] as discrete move events.
//!
//! [PlaybackController] is a state machine without any notion of time. An external scheduler
//! (a timer, an event loop, a test) calls [tick](PlaybackController::tick) every
//! [delay](PlaybackController::delay) and applies the returned [PlaybackEvent] to whatever it
//! renders. Calls must be serialized by the caller.
//!
//! ```text
//! Idle -> Running <-> Paused
//!            |          |
//!            v          v
//!        Completed  Cancelled
//! ```

use crate::error::PlaybackError;
use crate::path::Path;
use crate::Coordinate;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackStatus {
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl PlaybackStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlaybackStatus::Completed | PlaybackStatus::Cancelled)
    }

    /// Running or paused.
    pub fn is_active(&self) -> bool {
        matches!(self, PlaybackStatus::Running | PlaybackStatus::Paused)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackEvent {
    /// `from` is vacated and `to` becomes the current position.
    Move { from: Coordinate, to: Coordinate },
    Completed,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct PlaybackController {
    status: PlaybackStatus,
    position: Option<Coordinate>,
    remaining: VecDeque<Coordinate>,
    delay: Duration,
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController::new(crate::DEFAULT_DELAY)
    }
}

impl PlaybackController {
    pub fn new(delay: Duration) -> PlaybackController {
        PlaybackController {
            status: PlaybackStatus::Idle,
            position: None,
            remaining: VecDeque::new(),
            delay,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// The cell the replay currently occupies, [None] while idle.
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    /// Steps not yet emitted.
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = &Coordinate> + '_ {
        self.remaining.iter()
    }

    /// Pacing hint for the scheduler driving [tick](Self::tick).
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Takes effect from the next scheduled tick onwards, in any state.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Begins replaying `path` from its start.
    pub fn start(&mut self, path: &Path, delay: Duration) -> Result<(), PlaybackError> {
        if self.status != PlaybackStatus::Idle {
            return Err(PlaybackError::AlreadyRunning);
        }
        let start = path.start();
        self.remaining = path.steps().iter().copied().collect();
        // Nothing to move for the trivial path
        if path.is_trivial() {
            self.remaining.clear();
        }
        self.position = Some(start);
        self.delay = delay;
        self.transition(PlaybackStatus::Running);
        Ok(())
    }

    /// Emits the next move, or [PlaybackEvent::Completed] once every step has been emitted.
    pub fn tick(&mut self) -> Result<PlaybackEvent, PlaybackError> {
        if self.status != PlaybackStatus::Running {
            return Err(PlaybackError::NotRunning);
        }
        match (self.position, self.remaining.pop_front()) {
            (Some(from), Some(to)) => {
                self.position = Some(to);
                Ok(PlaybackEvent::Move { from, to })
            }
            _ => {
                self.transition(PlaybackStatus::Completed);
                Ok(PlaybackEvent::Completed)
            }
        }
    }

    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        self.expect_status(PlaybackStatus::Running, "pause")?;
        self.transition(PlaybackStatus::Paused);
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        self.expect_status(PlaybackStatus::Paused, "resume")?;
        self.transition(PlaybackStatus::Running);
        Ok(())
    }

    /// Pauses a running replay or resumes a paused one, returning the new status.
    pub fn toggle_pause(&mut self) -> Result<PlaybackStatus, PlaybackError> {
        match self.status() {
            PlaybackStatus::Running => self.pause()?,
            PlaybackStatus::Paused => self.resume()?,
            from => {
                return Err(PlaybackError::InvalidTransition {
                    from,
                    action: "toggle pause",
                })
            }
        }
        Ok(self.status)
    }

    /// Stops an active replay for good. No move is emitted afterwards.
    pub fn cancel(&mut self) -> Result<PlaybackEvent, PlaybackError> {
        if !self.status.is_active() {
            return Err(PlaybackError::InvalidTransition {
                from: self.status,
                action: "cancel",
            });
        }
        self.remaining.clear();
        self.transition(PlaybackStatus::Cancelled);
        Ok(PlaybackEvent::Cancelled)
    }

    /// Returns to [PlaybackStatus::Idle] from a terminal state, keeping only the delay.
    pub fn reset(&mut self) -> Result<(), PlaybackError> {
        if self.status.is_active() {
            return Err(PlaybackError::InvalidTransition {
                from: self.status,
                action: "reset",
            });
        }
        self.remaining.clear();
        self.position = None;
        self.transition(PlaybackStatus::Idle);
        Ok(())
    }

    /// Lazily ticks until the replay completes. Yields nothing while not running.
    pub fn replay(&mut self) -> Replay<'_> {
        Replay { controller: self }
    }

    fn expect_status(
        &self,
        expected: PlaybackStatus,
        action: &'static str,
    ) -> Result<(), PlaybackError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(PlaybackError::InvalidTransition {
                from: self.status,
                action,
            })
        }
    }

    fn transition(&mut self, to: PlaybackStatus) {
        debug!("Playback {:?} -> {:?}", self.status, to);
        self.status = to;
    }
}

/// Iterator returned by [PlaybackController::replay].
pub struct Replay<'a> {
    controller: &'a mut PlaybackController,
}

impl Iterator for Replay<'_> {
    type Item = PlaybackEvent;

    fn next(&mut self) -> Option<PlaybackEvent> {
        self.controller.tick().ok()
    }
}
