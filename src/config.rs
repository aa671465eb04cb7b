use crate::error::ConfigError;
use crate::{Coordinate, DEFAULT_DELAY, DEFAULT_GRID_SIZE, MAX_DELAY, MIN_DELAY};
use std::time::Duration;

/// Construction-time settings of a [crate::Simulation]. The grid size, start and goal are fixed
/// once the simulation exists; the delay can be adjusted afterwards within `[min_delay, max_delay]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub size: usize,
    pub start: Coordinate,
    pub goal: Coordinate,
    /// Pause between two ticks of a replay.
    pub delay: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let last = DEFAULT_GRID_SIZE as i32 - 1;
        SimulationConfig {
            size: DEFAULT_GRID_SIZE,
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(last, last),
            delay: DEFAULT_DELAY,
            min_delay: MIN_DELAY,
            max_delay: MAX_DELAY,
        }
    }
}

impl SimulationConfig {
    /// A square grid of the given size with start and goal in opposite corners.
    pub fn with_size(size: usize) -> Self {
        let last = size as i32 - 1;
        SimulationConfig {
            size,
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(last, last),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        for (name, coord) in [("start", self.start), ("goal", self.goal)] {
            if !coord.in_bounds(self.size) {
                return Err(ConfigError::OutOfRange {
                    name,
                    coord,
                    size: self.size,
                });
            }
        }
        if self.min_delay > self.max_delay {
            return Err(ConfigError::InvalidDelayBounds {
                min: self.min_delay,
                max: self.max_delay,
            });
        }
        if self.delay != self.clamp_delay(self.delay) {
            return Err(ConfigError::DelayOutOfRange {
                delay: self.delay,
                min: self.min_delay,
                max: self.max_delay,
            });
        }
        Ok(())
    }

    pub fn clamp_delay(&self, delay: Duration) -> Duration {
        delay.clamp(self.min_delay, self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.goal, Coordinate::new(9, 9));
        assert_eq!(config.delay, Duration::from_millis(300));
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(
            SimulationConfig::with_size(0).validate(),
            Err(ConfigError::EmptyGrid)
        );
        let config = SimulationConfig {
            goal: Coordinate::new(10, 0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "goal", .. })
        ));
        let config = SimulationConfig {
            min_delay: Duration::from_secs(2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelayBounds { .. })
        ));
    }

    #[test]
    fn rejects_delay_outside_bounds() {
        for delay in [Duration::from_secs(5), Duration::from_millis(10)] {
            let config = SimulationConfig {
                delay,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::DelayOutOfRange {
                    delay,
                    min: MIN_DELAY,
                    max: MAX_DELAY
                })
            );
        }
        let config = SimulationConfig {
            delay: MAX_DELAY,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn delay_is_clamped() {
        let config = SimulationConfig::default();
        assert_eq!(config.clamp_delay(Duration::from_millis(5)), MIN_DELAY);
        assert_eq!(config.clamp_delay(Duration::from_secs(5)), MAX_DELAY);
        let d = Duration::from_millis(450);
        assert_eq!(config.clamp_delay(d), d);
    }
}
