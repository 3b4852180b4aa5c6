//! Path planning on the maze grid.
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use vastu_maze::planning::{AStarConfig, AStarPlanner};
//!
//! let planner = AStarPlanner::new(AStarConfig::with_diagonals());
//! match planner.best_path(&mut grid, &goals)? {
//!     Some((goal, path)) => println!("{} hops to {}", path.len(), goal),
//!     None => println!("explore more"),
//! }
//! ```
//!
//! An unreachable goal is an ordinary `Ok(None)`; errors are reserved for
//! contract violations and corrupt search state.

pub mod astar;

pub use astar::{AStarConfig, AStarPlanner, PlannedPath};
