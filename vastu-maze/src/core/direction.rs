//! Eight-direction compass model and turn geometry.
//!
//! Directions are cyclically ordered at 45° increments, clockwise from north:
//!
//! | Index | Direction | Vector   | Label |
//! |-------|-----------|----------|-------|
//! | 0     | North     | (0, 1)   | `n`   |
//! | 1     | NorthEast | (1, 1)   | `ne`  |
//! | 2     | East      | (1, 0)   | `e`   |
//! | 3     | SouthEast | (1, -1)  | `se`  |
//! | 4     | South     | (0, -1)  | `s`   |
//! | 5     | SouthWest | (-1, -1) | `sw`  |
//! | 6     | West      | (-1, 0)  | `w`   |
//! | 7     | NorthWest | (-1, 1)  | `nw`  |
//!
//! One index step is a half-step (45°); two are a cardinal 90° turn.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MazeError, Result};

/// Number of canonical directions.
pub const DIRECTION_COUNT: u8 = 8;

/// One of the eight canonical compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// (0, 1)
    North = 0,
    /// (1, 1)
    NorthEast = 1,
    /// (1, 0)
    East = 2,
    /// (1, -1)
    SouthEast = 3,
    /// (0, -1)
    South = 4,
    /// (-1, -1)
    SouthWest = 5,
    /// (-1, 0)
    West = 6,
    /// (-1, 1)
    NorthWest = 7,
}

/// Wall slot of a cell. Only cardinal directions have one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WallSlot {
    /// North wall
    North = 0,
    /// East wall
    East = 1,
    /// South wall
    South = 2,
    /// West wall
    West = 3,
}

/// Up-front classification of a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionKind {
    /// Axis-aligned direction with a wall slot
    Cardinal(WallSlot),
    /// 45° direction between two cardinals
    Diagonal,
}

/// Which way to turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnSide {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl TurnSide {
    /// The opposite side
    pub fn mirror(self) -> Self {
        match self {
            TurnSide::Left => TurnSide::Right,
            TurnSide::Right => TurnSide::Left,
        }
    }
}

/// Minimal rotation between two headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    /// Number of 45° half-steps (0..=4)
    pub half_steps: u8,
    /// Turn direction
    pub side: TurnSide,
}

impl Rotation {
    /// True when the rotation is a whole number of 90° turns
    #[inline]
    pub fn is_cardinal(&self) -> bool {
        self.half_steps % 2 == 0
    }

    /// `(left_steps, right_steps)` for [`Direction::rotate`]
    #[inline]
    pub fn as_steps(&self) -> (u8, u8) {
        match self.side {
            TurnSide::Left => (self.half_steps, 0),
            TurnSide::Right => (0, self.half_steps),
        }
    }
}

const LABELS: [&str; 8] = ["n", "ne", "e", "se", "s", "sw", "w", "nw"];

impl Direction {
    /// All directions in canonical index order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions in canonical index order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Canonical index 0..7
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Direction from an index, wrapped modulo 8
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % DIRECTION_COUNT) as usize]
    }

    /// Unit grid vector `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Direction matching a grid vector.
    ///
    /// Anything other than the eight unit vectors is a contract violation.
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.delta() == (dx, dy))
            .ok_or(MazeError::InvalidDirection { dx, dy })
    }

    /// Compass label used on the simulator boundary
    pub fn label(self) -> &'static str {
        LABELS[self.index() as usize]
    }

    /// Parse a compass label (`n`, `ne`, ...)
    pub fn from_label(label: &str) -> Result<Self> {
        LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| Self::from_index(i as u8))
            .ok_or_else(|| MazeError::InvalidDirectionLabel(label.to_string()))
    }

    /// Cardinal/diagonal classification
    pub fn kind(self) -> DirectionKind {
        match self {
            Direction::North => DirectionKind::Cardinal(WallSlot::North),
            Direction::East => DirectionKind::Cardinal(WallSlot::East),
            Direction::South => DirectionKind::Cardinal(WallSlot::South),
            Direction::West => DirectionKind::Cardinal(WallSlot::West),
            _ => DirectionKind::Diagonal,
        }
    }

    /// True for N, E, S, W
    #[inline]
    pub fn is_cardinal(self) -> bool {
        matches!(self.kind(), DirectionKind::Cardinal(_))
    }

    /// Direction pointing the other way
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Heading after turning `left_steps` and `right_steps` half-steps.
    ///
    /// `(current + right − left) mod 8`
    #[inline]
    pub fn rotate(self, left_steps: u8, right_steps: u8) -> Self {
        let left = left_steps % DIRECTION_COUNT;
        let right = right_steps % DIRECTION_COUNT;
        Self::from_index(self.index() + right + DIRECTION_COUNT - left)
    }

    /// Direction 90° counter-clockwise
    #[inline]
    pub fn left(self) -> Self {
        self.rotate(2, 0)
    }

    /// Direction 90° clockwise
    #[inline]
    pub fn right(self) -> Self {
        self.rotate(0, 2)
    }

    /// Smallest rotation from `self` to `target`.
    ///
    /// Turns right only when strictly shorter; a 180° turn goes left.
    /// Facing the target already yields `(0, Right)`.
    pub fn minimal_rotation(self, target: Direction) -> Rotation {
        let steps_right = (target.index() + DIRECTION_COUNT - self.index()) % DIRECTION_COUNT;
        let steps_left = (self.index() + DIRECTION_COUNT - target.index()) % DIRECTION_COUNT;

        if steps_right == 0 {
            return Rotation {
                half_steps: 0,
                side: TurnSide::Right,
            };
        }

        let side = if steps_right < steps_left {
            TurnSide::Right
        } else {
            TurnSide::Left
        };

        Rotation {
            half_steps: steps_right.min(steps_left),
            side,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl WallSlot {
    /// Storage index 0..3
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction the slot faces
    pub fn direction(self) -> Direction {
        match self {
            WallSlot::North => Direction::North,
            WallSlot::East => Direction::East,
            WallSlot::South => Direction::South,
            WallSlot::West => Direction::West,
        }
    }

    /// The slot on the neighboring cell that faces back
    pub fn opposite(self) -> Self {
        match self {
            WallSlot::North => WallSlot::South,
            WallSlot::East => WallSlot::West,
            WallSlot::South => WallSlot::North,
            WallSlot::West => WallSlot::East,
        }
    }
}
