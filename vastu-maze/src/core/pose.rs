//! Robot pose on the cell grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CellCoord, Direction, Rotation};

/// Mouse position (cell) and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Current cell
    pub position: CellCoord,
    /// Current heading
    pub heading: Direction,
}

impl Pose {
    /// Create a new pose
    pub fn new(position: CellCoord, heading: Direction) -> Self {
        Self { position, heading }
    }

    /// Pose one cell ahead along the heading
    #[inline]
    pub fn advanced(&self) -> Self {
        Self::new(self.position.step(self.heading), self.heading)
    }

    /// Pose after turning by half-steps
    #[inline]
    pub fn turned(&self, left_steps: u8, right_steps: u8) -> Self {
        Self::new(self.position, self.heading.rotate(left_steps, right_steps))
    }

    /// Pose after applying a rotation
    #[inline]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let (left, right) = rotation.as_steps();
        self.turned(left, right)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(CellCoord::new(0, 0), Direction::North)
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.heading)
    }
}
