//! Physical pose tracking on a half-cell lattice.
//!
//! Coordinates are stored doubled so that half-cell advances stay integral:
//! `F` moves by twice the heading vector, `FH` by the heading vector itself.
//! A diagonal `F` therefore crosses one full cell diagonally and a diagonal
//! `FH` reaches the shared corner of two cells.

use crate::core::{CellCoord, Direction, Pose};

use super::Command;

/// Mouse pose in half-cell units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KinematicPose {
    /// Doubled x coordinate of the mouse
    pub x2: i32,
    /// Doubled y coordinate of the mouse
    pub y2: i32,
    /// Physical heading
    pub heading: Direction,
}

impl KinematicPose {
    /// Start at the centre of a cell
    pub fn from_pose(pose: Pose) -> Self {
        Self {
            x2: pose.position.x * 2,
            y2: pose.position.y * 2,
            heading: pose.heading,
        }
    }

    /// Execute one command
    pub fn apply(&mut self, command: Command) {
        let (dx, dy) = self.heading.delta();
        match command {
            Command::Forward => {
                self.x2 += 2 * dx;
                self.y2 += 2 * dy;
            }
            Command::ForwardHalf => {
                self.x2 += dx;
                self.y2 += dy;
            }
            turn => {
                let (left, right) = turn.rotation_steps();
                self.heading = self.heading.rotate(left, right);
            }
        }
    }

    /// Execute a whole stream
    pub fn run<'a>(mut self, commands: impl IntoIterator<Item = &'a Command>) -> Self {
        for command in commands {
            self.apply(*command);
        }
        self
    }

    /// Cell the mouse is centred on, if any
    pub fn cell(&self) -> Option<CellCoord> {
        if self.x2 % 2 == 0 && self.y2 % 2 == 0 {
            Some(CellCoord::new(self.x2 / 2, self.y2 / 2))
        } else {
            None
        }
    }

    /// Grid pose when centred on a cell
    pub fn pose(&self) -> Option<Pose> {
        self.cell().map(|cell| Pose::new(cell, self.heading))
    }
}

impl From<Pose> for KinematicPose {
    fn from(pose: Pose) -> Self {
        Self::from_pose(pose)
    }
}
