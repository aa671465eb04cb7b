use grid_replay::{find_path, Coordinate, PathingGrid};

// In this example a path is found on a 5x5 grid with shape
// S.#..
// ..#..
// ..#..
// ..#..
// ....G
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut pathing_grid =
        PathingGrid::new(5, Coordinate::new(0, 0), Coordinate::new(4, 4)).unwrap();
    for row in 0..4 {
        pathing_grid
            .set_obstacle(Coordinate::new(row, 2), true)
            .unwrap();
    }
    println!("{}", pathing_grid);
    match find_path(&pathing_grid, pathing_grid.start(), pathing_grid.goal()) {
        Ok(path) => {
            println!("Path:");
            for p in &path {
                println!("{}", p);
            }
        }
        Err(e) => println!("{}", e),
    }
}
