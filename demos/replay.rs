use grid_replay::{Coordinate, PlaybackEvent, Simulation, SimulationConfig};
use std::thread;
use std::time::Duration;

// Replays a path on the default 10x10 grid, driving the playback with a sleeping loop in place
// of a UI timer. Replaying speeds up halfway through.

fn main() {
    env_logger::init();
    let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
    for row in 0..9 {
        sim.toggle(Coordinate::new(row, 3)).unwrap();
    }
    for row in 1..10 {
        sim.toggle(Coordinate::new(row, 6)).unwrap();
    }
    print!("{}", sim.grid());

    let path = match sim.start() {
        Ok(path) => path,
        Err(e) if e.is_not_found() => {
            println!("No path found!");
            return;
        }
        Err(e) => panic!("{}", e),
    };
    println!("Found a path of {} moves", path.hops());
    let mut moves = 0;
    loop {
        thread::sleep(sim.delay());
        match sim.tick() {
            Ok(PlaybackEvent::Move { from, to }) => {
                println!("{} -> {}", from, to);
                moves += 1;
                if moves == path.len() / 2 {
                    sim.set_delay(Duration::from_millis(100));
                }
            }
            Ok(_) | Err(_) => break,
        }
    }
    println!("Path completed!");
}
