//! Maze cell with wall slots and search scratch fields.

use serde::{Deserialize, Serialize};

use super::{CellCoord, WallSlot};

/// One wall slot of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Wall {
    /// Wall has been observed
    pub exists: bool,
    /// The same wall is recorded on the neighboring cell
    pub is_shared: bool,
}

/// A single maze cell.
///
/// Wall and exploration state persist for the whole run. The search fields
/// (`cost_from_start`, `total_cost`, `predecessor`) are scratch space owned
/// by the pathfinder and are only meaningful during or right after a search.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    coord: CellCoord,
    walls: [Wall; 4],
    explored: bool,

    /// g: best known cost from the search start
    pub cost_from_start: f64,
    /// f = g + h
    pub total_cost: f64,
    /// Previous cell on the best known path
    pub predecessor: Option<CellCoord>,
}

impl Cell {
    /// Create an unexplored cell with no known walls
    pub fn new(coord: CellCoord) -> Self {
        Self {
            coord,
            walls: [Wall::default(); 4],
            explored: false,
            cost_from_start: f64::INFINITY,
            total_cost: f64::INFINITY,
            predecessor: None,
        }
    }

    /// Cell coordinates
    #[inline]
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Column
    #[inline]
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    /// Row
    #[inline]
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Wall slot state
    #[inline]
    pub fn wall(&self, slot: WallSlot) -> Wall {
        self.walls[slot.index()]
    }

    /// Whether a wall is known in the slot
    #[inline]
    pub fn has_wall(&self, slot: WallSlot) -> bool {
        self.walls[slot.index()].exists
    }

    /// Record a wall in the slot
    pub fn add_wall(&mut self, slot: WallSlot, is_shared: bool) {
        self.walls[slot.index()] = Wall {
            exists: true,
            is_shared,
        };
    }

    /// Whether the cell has been sensed
    #[inline]
    pub fn is_explored(&self) -> bool {
        self.explored
    }

    /// Mark the cell sensed or not
    #[inline]
    pub fn set_explored(&mut self, explored: bool) {
        self.explored = explored;
    }

    /// Clear search scratch fields
    #[inline]
    pub fn reset_search(&mut self) {
        self.cost_from_start = f64::INFINITY;
        self.total_cost = f64::INFINITY;
        self.predecessor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_open() {
        let cell = Cell::new(CellCoord::new(2, 3));
        assert_eq!((cell.x(), cell.y()), (2, 3));
        assert!(!cell.is_explored());
        for slot in [WallSlot::North, WallSlot::East, WallSlot::South, WallSlot::West] {
            assert!(!cell.has_wall(slot));
        }
        assert!(cell.cost_from_start.is_infinite());
    }

    #[test]
    fn test_add_wall_and_reset() {
        let mut cell = Cell::new(CellCoord::new(0, 0));
        cell.add_wall(WallSlot::East, true);
        assert_eq!(
            cell.wall(WallSlot::East),
            Wall {
                exists: true,
                is_shared: true
            }
        );

        cell.cost_from_start = 1.0;
        cell.predecessor = Some(CellCoord::new(1, 0));
        cell.reset_search();
        assert!(cell.cost_from_start.is_infinite());
        assert!(cell.total_cost.is_infinite());
        assert_eq!(cell.predecessor, None);
        assert!(cell.has_wall(WallSlot::East));
    }
}
