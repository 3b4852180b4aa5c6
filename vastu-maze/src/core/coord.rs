//! Cell coordinates on the maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::Direction;

/// Maze cell coordinates (column, row).
///
/// `(0, 0)` is the south-west corner; north is `+y`, east is `+x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl CellCoord {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbor one step away in `direction`
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Straight-line distance to another cell
    #[inline]
    pub fn euclidean_distance(&self, other: &CellCoord) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Octile distance: the shortest 8-connected travel cost with unit
    /// cardinal steps and √2 diagonal steps, ignoring walls.
    #[inline]
    pub fn octile_distance(&self, other: &CellCoord) -> f64 {
        let dx = (self.x - other.x).abs() as f64;
        let dy = (self.y - other.y).abs() as f64;
        (dx + dy) + (std::f64::consts::SQRT_2 - 2.0) * dx.min(dy)
    }

    /// Squared length of the offset to another cell
    #[inline]
    pub fn squared_distance(&self, other: &CellCoord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for CellCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        CellCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for CellCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        CellCoord::new(self.x - other.x, self.y - other.y)
    }
}
