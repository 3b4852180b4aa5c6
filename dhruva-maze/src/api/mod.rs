//! Mouse hardware abstraction.
//!
//! [`MouseApi`] is everything the controller needs from the outside world:
//! three wall sensors, the six motion primitives and a handful of display
//! calls for the simulator's maze view. [`MmsClient`] speaks the mms
//! simulator's line protocol; tests drive the controller with an in-memory
//! mouse instead.

mod mms;

#[cfg(test)]
pub mod mock;

pub use mms::MmsClient;

use crate::error::Result;
use vastu_maze::{Command, Direction};

/// Sensors, actuators and display of one mouse
pub trait MouseApi {
    /// Maze width reported by the environment
    fn maze_width(&mut self) -> Result<usize>;
    /// Maze height reported by the environment
    fn maze_height(&mut self) -> Result<usize>;

    /// Wall directly ahead of the current cell
    fn wall_front(&mut self) -> Result<bool>;
    /// Wall on the left of the current cell
    fn wall_left(&mut self) -> Result<bool>;
    /// Wall on the right of the current cell
    fn wall_right(&mut self) -> Result<bool>;

    /// Advance one cell. A wall in the way is a [`DhruvaError::Crash`](crate::error::DhruvaError::Crash).
    fn move_forward(&mut self) -> Result<()>;
    /// Advance half a cell
    fn move_forward_half(&mut self) -> Result<()>;
    fn turn_left(&mut self) -> Result<()>;
    fn turn_right(&mut self) -> Result<()>;
    fn turn_left_45(&mut self) -> Result<()>;
    fn turn_right_45(&mut self) -> Result<()>;

    /// Show a wall in the maze view. Only cardinal directions have walls.
    fn set_wall(&mut self, x: i32, y: i32, direction: Direction) -> Result<()>;
    fn set_color(&mut self, x: i32, y: i32, color: char) -> Result<()>;
    fn clear_color(&mut self, x: i32, y: i32) -> Result<()>;
    fn clear_all_color(&mut self) -> Result<()>;
    fn set_text(&mut self, x: i32, y: i32, text: &str) -> Result<()>;
    fn clear_text(&mut self, x: i32, y: i32) -> Result<()>;
    fn clear_all_text(&mut self) -> Result<()>;

    /// Whether the operator pressed reset since the last acknowledgement
    fn was_reset(&mut self) -> Result<bool>;
    fn ack_reset(&mut self) -> Result<()>;

    /// Dispatch one compiled command to its motion primitive
    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Forward => self.move_forward(),
            Command::ForwardHalf => self.move_forward_half(),
            Command::TurnLeft => self.turn_left(),
            Command::TurnRight => self.turn_right(),
            Command::TurnLeft45 => self.turn_left_45(),
            Command::TurnRight45 => self.turn_right_45(),
        }
    }
}
