//! Error types for VastuMaze

use crate::core::{CellCoord, Direction};

/// Result type alias
pub type Result<T> = std::result::Result<T, MazeError>;

/// VastuMaze error types
///
/// Every variant is a contract violation or an internal-consistency fault.
/// An unreachable goal is not an error: the pathfinder reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Cell lookup outside the grid extents
    #[error("Cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
        /// Grid width
        cols: usize,
        /// Grid height
        rows: usize,
    },

    /// Vector is not one of the eight canonical directions
    #[error("({dx}, {dy}) is not a canonical direction")]
    InvalidDirection {
        /// X component
        dx: i32,
        /// Y component
        dy: i32,
    },

    /// Direction label is not one of n, ne, e, se, s, sw, w, nw
    #[error("Invalid direction label: {0:?}")]
    InvalidDirectionLabel(String),

    /// Wall slots only exist for the four cardinal directions
    #[error("Wall lookup on diagonal direction {0}")]
    DiagonalWallQuery(Direction),

    /// Predecessor chain did not lead back to the start cell
    #[error("Predecessor chain from {goal} broke at {at} before reaching {start}")]
    BrokenPredecessorChain {
        /// Search start
        start: CellCoord,
        /// Search goal
        goal: CellCoord,
        /// Last cell reached while walking back
        at: CellCoord,
    },

    /// Search hit its configured expansion cap before settling
    #[error("Search for {goal} gave up after expanding {expanded} cells")]
    SearchLimitExceeded {
        /// Search goal
        goal: CellCoord,
        /// Cells expanded before giving up
        expanded: usize,
    },

    /// Diagonal hop with no clear corner cell
    #[error("Diagonal hop {from} -> {to} has no clear corner to decompose through")]
    UndecomposableDiagonal {
        /// Hop origin
        from: CellCoord,
        /// Hop destination
        to: CellCoord,
    },

    /// Naive translation needs the working heading to be cardinal
    #[error("Cannot translate cardinal hop while facing {0}")]
    NonCardinalHeading(Direction),

    /// Unknown command token
    #[error("Invalid command token: {0:?}")]
    InvalidCommand(String),
}
