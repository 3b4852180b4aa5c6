//! Movement feasibility between adjacent cells.
//!
//! A cardinal hop is legal when no wall separates the two cells. A diagonal
//! hop is realised physically as two half-steps around a corner cell, so it
//! is legal only when one of the two L-shaped detours is wall-free on both
//! legs. Diagonal legality depends on corner walls that are only trustworthy
//! once sensed, so the destination must already be explored.

use crate::core::{CellCoord, Direction, TurnSide};
use crate::error::Result;
use crate::grid::MazeGrid;

/// Result of classifying a hop between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    /// Hop is legal under current wall knowledge
    pub can_move: bool,
    /// Hop is a legal diagonal
    pub is_diagonal: bool,
    /// Which corner detour was selected (diagonals only)
    pub diagonal_side: Option<TurnSide>,
    /// Corner cell the diagonal is decomposed through
    pub intermediate: Option<CellCoord>,
    /// Raw offset `to − from`
    pub delta: (i32, i32),
}

impl Movement {
    fn blocked(delta: (i32, i32)) -> Self {
        Self {
            can_move: false,
            is_diagonal: false,
            diagonal_side: None,
            intermediate: None,
            delta,
        }
    }

    fn cardinal(can_move: bool, delta: (i32, i32)) -> Self {
        Self {
            can_move,
            ..Self::blocked(delta)
        }
    }

    fn diagonal(side: TurnSide, intermediate: CellCoord, delta: (i32, i32)) -> Self {
        Self {
            can_move: true,
            is_diagonal: true,
            diagonal_side: Some(side),
            intermediate: Some(intermediate),
            delta,
        }
    }

    /// Hop direction, if the cells are adjacent
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta(self.delta.0, self.delta.1).ok()
    }
}

/// Classify the hop `from → to`.
///
/// Non-adjacent cells are never movable. Both cells must be inside the grid.
pub fn classify(
    grid: &MazeGrid,
    from: CellCoord,
    to: CellCoord,
    diagonals_allowed: bool,
) -> Result<Movement> {
    grid.index(from)?;
    let target = grid.cell(to)?;
    let delta = (to.x - from.x, to.y - from.y);

    match from.squared_distance(&to) {
        1 => {
            let direction = Direction::from_delta(delta.0, delta.1)?;
            let open = !grid.wall_exists(from, direction)?;
            Ok(Movement::cardinal(open, delta))
        }
        2 => {
            if !diagonals_allowed || !target.is_explored() {
                return Ok(Movement::blocked(delta));
            }

            let horizontal = Direction::from_delta(delta.0, 0)?;
            let vertical = Direction::from_delta(0, delta.1)?;

            // Horizontal first: across `from`'s side wall, then up/down into `to`.
            let horizontal_clear = !grid.wall_exists(from, horizontal)?
                && !grid.wall_exists(to, vertical.opposite())?;
            // Vertical first: across `from`'s top/bottom wall, then sideways into `to`.
            let vertical_clear = !grid.wall_exists(from, vertical)?
                && !grid.wall_exists(to, horizontal.opposite())?;

            let horizontal_corner = CellCoord::new(to.x, from.y);
            let vertical_corner = CellCoord::new(from.x, to.y);

            // The leg with the lower canonical index is the left detour.
            let (left, right) = if horizontal.index() < vertical.index() {
                ((horizontal_clear, horizontal_corner), (vertical_clear, vertical_corner))
            } else {
                ((vertical_clear, vertical_corner), (horizontal_clear, horizontal_corner))
            };

            Ok(if left.0 {
                Movement::diagonal(TurnSide::Left, left.1, delta)
            } else if right.0 {
                Movement::diagonal(TurnSide::Right, right.1, delta)
            } else {
                Movement::blocked(delta)
            })
        }
        _ => Ok(Movement::blocked(delta)),
    }
}
