//! # VastuMaze
//!
//! Pathfinding and motion compilation for a micromouse on a discrete maze.
//!
//! ## Overview
//!
//! The mouse learns walls incrementally. Each time it plans, the library:
//!
//! 1. Searches the known maze with A* ([`planning`]), asking the
//!    [`movement`] classifier which hops are legal under current walls
//! 2. Translates the cell path into 90° turns and full-cell advances
//!    ([`compile::translate_path`])
//! 3. Optionally rewrites that stream into 45° diagonal gaits
//!    ([`compile::rewrite_diagonals`]) once the maze is fully known
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_maze::config::MazeSection;
//! use vastu_maze::planning::{AStarConfig, AStarPlanner};
//! use vastu_maze::compile::{rewrite_diagonals, translate_path};
//!
//! let mut grid = MazeSection::default().to_grid()?;
//! let planner = AStarPlanner::new(AStarConfig::with_diagonals());
//!
//! if let Some((goal, path)) = planner.best_path(&mut grid, &grid.goals().to_vec())? {
//!     let naive = translate_path(&grid, grid.pose(), &path.cells)?;
//!     let plan = rewrite_diagonals(grid.pose(), &naive)?;
//!     println!("{} commands to {}", plan.commands.len(), goal);
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - X: East (column)
//! - Y: North (row)
//! - Headings: eight compass directions, index 0 = north, increasing clockwise

#![warn(missing_docs)]

// Core types
pub mod core;

// Cell storage, walls, pose
pub mod grid;

// Hop legality
pub mod movement;

// A* search
pub mod planning;

// Path to command compilation
pub mod compile;

// Configuration loading
pub mod config;

pub mod error;

// Re-export commonly used types
pub use crate::core::{Cell, CellCoord, Direction, DirectionKind, Pose, Rotation, TurnSide, WallSlot};

pub use grid::MazeGrid;

pub use movement::{classify, Movement};

pub use planning::{AStarConfig, AStarPlanner, PlannedPath};

pub use compile::{
    rewrite_diagonals, translate_path, Command, CommandSequence, GaitPlan, KinematicPose,
    MovementBlock,
};

pub use config::{ConfigLoadError, MazeSection};

pub use error::{MazeError, Result};
