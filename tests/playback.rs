use grid_replay::{
    Coordinate, Path, PlaybackController, PlaybackError, PlaybackEvent, PlaybackStatus,
    Simulation, SimulationConfig,
};
use std::time::Duration;

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn two_step_replay() {
    let path = Path::new(c(0, 0), vec![c(0, 1), c(0, 2)]);
    let mut controller = PlaybackController::default();
    controller.start(&path, Duration::from_millis(100)).unwrap();
    assert_eq!(
        controller.tick().unwrap(),
        PlaybackEvent::Move {
            from: c(0, 0),
            to: c(0, 1)
        }
    );
    assert_eq!(
        controller.tick().unwrap(),
        PlaybackEvent::Move {
            from: c(0, 1),
            to: c(0, 2)
        }
    );
    assert_eq!(controller.tick().unwrap(), PlaybackEvent::Completed);
    assert_eq!(controller.tick(), Err(PlaybackError::NotRunning));
}

#[test]
fn cancel_after_one_tick() {
    let path = Path::new(c(0, 0), vec![c(0, 1), c(0, 2)]);
    let mut controller = PlaybackController::default();
    controller.start(&path, Duration::from_millis(100)).unwrap();
    controller.tick().unwrap();
    controller.cancel().unwrap();
    assert_eq!(controller.status(), PlaybackStatus::Cancelled);
    assert_eq!(controller.tick(), Err(PlaybackError::NotRunning));
    controller.reset().unwrap();
    assert_eq!(controller.status(), PlaybackStatus::Idle);
}

/// Drives a full default simulation the way a timer would, checking every move.
#[test]
fn simulation_replays_found_path() {
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    for row in 0..9 {
        sim.toggle(c(row, 5)).unwrap();
    }
    let path = sim.start().unwrap();
    let mut position = sim.grid().start();
    let mut moves = 0;
    loop {
        match sim.tick().unwrap() {
            PlaybackEvent::Move { from, to } => {
                assert_eq!(from, position);
                assert!(from.is_adjacent(&to));
                position = to;
                moves += 1;
            }
            PlaybackEvent::Completed => break,
            PlaybackEvent::Cancelled => unreachable!(),
        }
    }
    assert_eq!(moves, path.len());
    assert_eq!(position, sim.grid().goal());
    assert!(path.steps().contains(&c(9, 5)));
}

#[test]
fn paused_simulation_emits_nothing() {
    let mut sim = Simulation::new(SimulationConfig::with_size(4)).unwrap();
    sim.start().unwrap();
    sim.tick().unwrap();
    assert_eq!(sim.toggle_pause().unwrap(), PlaybackStatus::Paused);
    assert!(sim.tick().is_err());
    sim.set_delay(Duration::from_millis(800));
    sim.resume().unwrap();
    assert_eq!(sim.delay(), Duration::from_millis(800));
    assert!(matches!(sim.tick().unwrap(), PlaybackEvent::Move { .. }));
    sim.cancel().unwrap();
    assert!(sim.tick().is_err());
}
