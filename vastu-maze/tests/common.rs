//! Test utilities for VastuMaze.
//!
//! Grid builders, a deterministic wall scatterer and a brute-force reference
//! search to check A* against.

#![allow(dead_code)]

use rand::prelude::*;
use vastu_maze::{classify, CellCoord, Command, Direction, MazeGrid, Pose};

/// The reference centre goals, in configuration order.
pub const CENTRE_GOALS: [CellCoord; 4] = [
    CellCoord::new(7, 7),
    CellCoord::new(7, 8),
    CellCoord::new(8, 7),
    CellCoord::new(8, 8),
];

/// Walled, fully explored grid with the mouse at `(0, 0)` facing north.
pub fn open_grid(size: usize) -> MazeGrid {
    open_grid_with_goals(size, vec![])
}

/// Same as [`open_grid`] with goal cells.
pub fn open_grid_with_goals(size: usize, goals: Vec<CellCoord>) -> MazeGrid {
    let mut grid = MazeGrid::new(size, size, Pose::default(), goals).unwrap();
    grid.add_boundary_walls().unwrap();
    grid.mark_all_explored();
    grid
}

/// Open grid with interior east/north walls scattered with probability `density`.
pub fn scattered_grid(size: usize, density: f64, seed: u64) -> MazeGrid {
    let mut grid = open_grid(size);
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let cell = CellCoord::new(x, y);
            if x + 1 < size as i32 && rng.random_bool(density) {
                grid.add_wall(cell, Direction::East).unwrap();
            }
            if y + 1 < size as i32 && rng.random_bool(density) {
                grid.add_wall(cell, Direction::North).unwrap();
            }
        }
    }
    grid
}

/// Plain Dijkstra over the classifier, as a reference for A* costs.
pub fn reference_cost(
    grid: &MazeGrid,
    start: CellCoord,
    goal: CellCoord,
    diagonals: bool,
) -> Option<f64> {
    let n = grid.cols() * grid.rows();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[grid.index(start).unwrap()] = 0.0;

    loop {
        let next = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].partial_cmp(&dist[b]).unwrap());
        let Some(u) = next else {
            return None;
        };
        done[u] = true;

        let coord = CellCoord::new((u % grid.cols()) as i32, (u / grid.cols()) as i32);
        if coord == goal {
            return Some(dist[u]);
        }

        for neighbor in grid.neighbors(coord, diagonals) {
            if !classify(grid, coord, neighbor, diagonals).unwrap().can_move {
                continue;
            }
            let v = grid.index(neighbor).unwrap();
            let candidate = dist[u] + coord.euclidean_distance(&neighbor);
            if candidate < dist[v] {
                dist[v] = candidate;
            }
        }
    }
}

/// Step a pose through a naive stream, asserting no advance crosses a known
/// wall. Returns the final pose.
pub fn walk_naive(grid: &MazeGrid, start: Pose, commands: &[Command]) -> Pose {
    let mut pose = start;
    for command in commands {
        pose = match command {
            Command::Forward => {
                assert!(
                    !grid.wall_exists(pose.position, pose.heading).unwrap(),
                    "advance from {} crosses a wall",
                    pose
                );
                pose.advanced()
            }
            Command::TurnLeft => pose.turned(2, 0),
            Command::TurnRight => pose.turned(0, 2),
            other => panic!("{} is not a naive command", other),
        };
    }
    pose
}
