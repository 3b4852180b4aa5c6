//! Core types for the VastuMaze library.
//!
//! ## Coordinate System
//!
//! - **X-axis**: East (column index)
//! - **Y-axis**: North (row index)
//! - `(0, 0)` is the south-west corner cell
//!
//! ## Type Categories
//!
//! - [`CellCoord`]: Integer cell indices
//! - [`Direction`]: Eight-way compass heading with 45° turn arithmetic
//! - [`Pose`]: Cell position plus heading
//! - [`Cell`]: Wall slots, exploration flag and A* scratch fields

mod cell;
mod coord;
mod direction;
mod pose;

pub use cell::{Cell, Wall};
pub use coord::CellCoord;
pub use direction::{Direction, DirectionKind, Rotation, TurnSide, WallSlot, DIRECTION_COUNT};
pub use pose::Pose;
