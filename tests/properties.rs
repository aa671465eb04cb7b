use grid_replay::{find_path, Coordinate, PathingGrid};
use proptest::prelude::*;

fn corner_grid(n: usize) -> PathingGrid {
    let last = n as i32 - 1;
    PathingGrid::new(n, Coordinate::new(0, 0), Coordinate::new(last, last)).unwrap()
}

fn blocked_grid(n: usize, cells: &[(i32, i32)]) -> PathingGrid {
    let mut grid = corner_grid(n);
    for &(row, col) in cells {
        let coord = Coordinate::new(row % n as i32, col % n as i32);
        if !grid.is_protected(&coord) {
            grid.set_obstacle(coord, true).unwrap();
        }
    }
    grid
}

#[test]
fn wall_with_gap_in_bottom_row() {
    let mut grid = corner_grid(5);
    for row in 0..4 {
        grid.set_obstacle(Coordinate::new(row, 2), true).unwrap();
    }
    let path = find_path(&grid, grid.start(), grid.goal()).unwrap();
    assert_eq!(path.len(), 8);
    assert!(path.steps().contains(&Coordinate::new(4, 2)));
}

#[test]
fn full_wall_means_not_found() {
    let mut grid = corner_grid(5);
    for row in 0..5 {
        grid.set_obstacle(Coordinate::new(row, 2), true).unwrap();
    }
    let result = find_path(&grid, grid.start(), grid.goal());
    assert!(result.unwrap_err().is_not_found());
}

proptest! {
    #[test]
    fn open_grid_path_is_manhattan(n in 2usize..16) {
        let grid = corner_grid(n);
        let path = find_path(&grid, grid.start(), grid.goal()).unwrap();
        prop_assert_eq!(path.len(), 2 * (n - 1));
    }

    #[test]
    fn paths_are_adjacent_and_free(
        n in 2usize..10,
        cells in prop::collection::vec((0i32..10, 0i32..10), 0..40),
    ) {
        let grid = blocked_grid(n, &cells);
        if let Ok(path) = find_path(&grid, grid.start(), grid.goal()) {
            prop_assert!(path.is_contiguous());
            for step in path.steps() {
                prop_assert!(!grid.is_blocked(*step).unwrap());
            }
        }
    }

    #[test]
    fn start_and_goal_stay_free(
        n in 1usize..8,
        toggles in prop::collection::vec((0i32..8, 0i32..8), 0..30),
    ) {
        let mut grid = corner_grid(n);
        for (row, col) in toggles {
            let _ = grid.toggle(Coordinate::new(row % n as i32, col % n as i32));
        }
        prop_assert!(!grid.is_blocked(grid.start()).unwrap());
        prop_assert!(!grid.is_blocked(grid.goal()).unwrap());
    }

    #[test]
    fn reset_matches_fresh_grid(
        n in 2usize..10,
        cells in prop::collection::vec((0i32..10, 0i32..10), 0..40),
    ) {
        let mut grid = blocked_grid(n, &cells);
        grid.reset();
        let fresh = corner_grid(n);
        let after_reset = find_path(&grid, grid.start(), grid.goal()).unwrap();
        let expected = find_path(&fresh, fresh.start(), fresh.goal()).unwrap();
        prop_assert_eq!(after_reset, expected);
    }
}
