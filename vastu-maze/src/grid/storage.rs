//! Dense maze grid storage.

use crate::core::{Cell, CellCoord, Direction, DirectionKind, Pose, WallSlot};
use crate::error::{MazeError, Result};

/// Maze grid: exclusive owner of every cell, the mouse pose and the goal set.
///
/// Cells live in a row-major `Vec` indexed by `y * cols + x` and are never
/// reallocated; only their fields change. Dimensions and goals are fixed at
/// construction.
///
/// The grid's search scratch fields are reused by every A* run, so at most
/// one search may use a grid at a time. `&mut self` on the planner entry
/// points enforces that.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
    pose: Pose,
    goals: Vec<CellCoord>,
}

impl MazeGrid {
    /// Create a grid with no known walls.
    ///
    /// Fails if the start position or any goal lies outside the grid.
    pub fn new(cols: usize, rows: usize, start: Pose, goals: Vec<CellCoord>) -> Result<Self> {
        let mut cells = Vec::with_capacity(cols * rows);
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                cells.push(Cell::new(CellCoord::new(x, y)));
            }
        }

        let grid = Self {
            cells,
            cols,
            rows,
            pose: start,
            goals,
        };

        grid.index(start.position)?;
        for goal in &grid.goals {
            grid.index(*goal)?;
        }

        Ok(grid)
    }

    /// Grid width in cells
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the coordinate lies inside the grid
    #[inline]
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.cols && (coord.y as usize) < self.rows
    }

    /// Storage index of a coordinate
    #[inline]
    pub fn index(&self, coord: CellCoord) -> Result<usize> {
        if self.contains(coord) {
            Ok(coord.y as usize * self.cols + coord.x as usize)
        } else {
            Err(MazeError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Cell at a coordinate
    #[inline]
    pub fn cell(&self, coord: CellCoord) -> Result<&Cell> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    /// Mutable cell at a coordinate
    #[inline]
    pub fn cell_mut(&mut self, coord: CellCoord) -> Result<&mut Cell> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // === Walls ===

    /// Record a wall on the `direction` side of `coord`.
    ///
    /// When the neighbor across the wall is inside the grid the mirrored slot
    /// is set in the same call and both are marked shared. Boundary walls are
    /// never shared.
    pub fn add_wall(&mut self, coord: CellCoord, direction: Direction) -> Result<()> {
        let slot = Self::wall_slot(direction)?;
        let neighbor = coord.step(direction);
        let shared = self.contains(neighbor);

        self.cell_mut(coord)?.add_wall(slot, shared);
        if shared {
            self.cell_mut(neighbor)?.add_wall(slot.opposite(), true);
        }
        Ok(())
    }

    /// Whether a wall is known on the `direction` side of `coord`.
    ///
    /// Only defined for cardinal directions.
    pub fn wall_exists(&self, coord: CellCoord, direction: Direction) -> Result<bool> {
        let slot = Self::wall_slot(direction)?;
        Ok(self.cell(coord)?.has_wall(slot))
    }

    /// Wall every outer edge of the grid.
    pub fn add_boundary_walls(&mut self) -> Result<()> {
        let (cols, rows) = (self.cols as i32, self.rows as i32);
        for x in 0..cols {
            self.add_wall(CellCoord::new(x, 0), Direction::South)?;
            self.add_wall(CellCoord::new(x, rows - 1), Direction::North)?;
        }
        for y in 0..rows {
            self.add_wall(CellCoord::new(0, y), Direction::West)?;
            self.add_wall(CellCoord::new(cols - 1, y), Direction::East)?;
        }
        Ok(())
    }

    fn wall_slot(direction: Direction) -> Result<WallSlot> {
        match direction.kind() {
            DirectionKind::Cardinal(slot) => Ok(slot),
            DirectionKind::Diagonal => Err(MazeError::DiagonalWallQuery(direction)),
        }
    }

    // === Exploration ===

    /// Mark a cell as sensed
    pub fn set_explored(&mut self, coord: CellCoord, explored: bool) -> Result<()> {
        self.cell_mut(coord)?.set_explored(explored);
        Ok(())
    }

    /// Whether a cell has been sensed
    pub fn is_explored(&self, coord: CellCoord) -> Result<bool> {
        Ok(self.cell(coord)?.is_explored())
    }

    /// Treat every cell as sensed (speed-run mode after full exploration)
    pub fn mark_all_explored(&mut self) {
        for cell in &mut self.cells {
            cell.set_explored(true);
        }
    }

    /// Number of sensed cells
    pub fn explored_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_explored()).count()
    }

    // === Search scratch ===

    /// Set every cell's g and f to +∞ and clear predecessors.
    ///
    /// Must run before every search on this grid.
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }

    /// In-bounds neighbors in canonical direction order.
    ///
    /// Eight-connected when `diagonals_allowed`, otherwise four-connected.
    pub fn neighbors(&self, coord: CellCoord, diagonals_allowed: bool) -> Vec<CellCoord> {
        Direction::ALL
            .iter()
            .filter(|d| diagonals_allowed || d.is_cardinal())
            .map(|d| coord.step(*d))
            .filter(|c| self.contains(*c))
            .collect()
    }

    // === Mouse pose and goals ===

    /// Current mouse pose
    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current mouse cell
    #[inline]
    pub fn position(&self) -> CellCoord {
        self.pose.position
    }

    /// Current mouse heading
    #[inline]
    pub fn heading(&self) -> Direction {
        self.pose.heading
    }

    /// Move the mouse. The position must be inside the grid.
    pub fn set_pose(&mut self, pose: Pose) -> Result<()> {
        self.index(pose.position)?;
        self.pose = pose;
        Ok(())
    }

    /// Configured goal cells
    #[inline]
    pub fn goals(&self) -> &[CellCoord] {
        &self.goals
    }

    /// Whether `coord` is one of the goal cells
    #[inline]
    pub fn is_goal(&self, coord: CellCoord) -> bool {
        self.goals.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> MazeGrid {
        MazeGrid::new(4, 3, Pose::default(), vec![CellCoord::new(2, 1)]).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        let bad_start = Pose::new(CellCoord::new(4, 0), Direction::North);
        assert!(matches!(
            MazeGrid::new(4, 3, bad_start, vec![]),
            Err(MazeError::OutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(MazeGrid::new(4, 3, Pose::default(), vec![CellCoord::new(0, 3)]).is_err());
    }

    #[test]
    fn test_cell_lookup_fails_fast() {
        let g = grid();
        assert_eq!(g.cell(CellCoord::new(3, 2)).unwrap().coord(), CellCoord::new(3, 2));
        assert!(g.cell(CellCoord::new(-1, 0)).is_err());
        assert!(g.cell(CellCoord::new(0, 3)).is_err());
    }

    #[test]
    fn test_shared_wall() {
        let mut g = grid();
        g.add_wall(CellCoord::new(1, 1), Direction::East).unwrap();

        let a = g.cell(CellCoord::new(1, 1)).unwrap().wall(WallSlot::East);
        let b = g.cell(CellCoord::new(2, 1)).unwrap().wall(WallSlot::West);
        assert!(a.exists && a.is_shared);
        assert_eq!(a, b);
        assert!(g.wall_exists(CellCoord::new(2, 1), Direction::West).unwrap());
    }

    #[test]
    fn test_boundary_wall_not_shared() {
        let mut g = grid();
        g.add_wall(CellCoord::new(0, 0), Direction::South).unwrap();
        let w = g.cell(CellCoord::new(0, 0)).unwrap().wall(WallSlot::South);
        assert!(w.exists);
        assert!(!w.is_shared);
    }

    #[test]
    fn test_boundary_walls() {
        let mut g = grid();
        g.add_boundary_walls().unwrap();
        assert!(g.wall_exists(CellCoord::new(0, 1), Direction::West).unwrap());
        assert!(g.wall_exists(CellCoord::new(3, 2), Direction::North).unwrap());
        assert!(g.wall_exists(CellCoord::new(3, 2), Direction::East).unwrap());
        assert!(!g.wall_exists(CellCoord::new(1, 1), Direction::North).unwrap());
    }

    #[test]
    fn test_diagonal_wall_query_is_rejected() {
        let mut g = grid();
        assert_eq!(
            g.wall_exists(CellCoord::new(1, 1), Direction::NorthEast),
            Err(MazeError::DiagonalWallQuery(Direction::NorthEast))
        );
        assert!(g.add_wall(CellCoord::new(1, 1), Direction::SouthWest).is_err());
    }

    #[test]
    fn test_neighbors() {
        let g = grid();
        assert_eq!(
            g.neighbors(CellCoord::new(0, 0), false),
            vec![CellCoord::new(0, 1), CellCoord::new(1, 0)]
        );
        assert_eq!(g.neighbors(CellCoord::new(0, 0), true).len(), 3);
        assert_eq!(g.neighbors(CellCoord::new(1, 1), true).len(), 8);
    }

    #[test]
    fn test_reset_search_state() {
        let mut g = grid();
        {
            let c = g.cell_mut(CellCoord::new(1, 1)).unwrap();
            c.cost_from_start = 2.0;
            c.total_cost = 3.0;
            c.predecessor = Some(CellCoord::new(0, 0));
        }
        g.reset_search_state();
        assert!(g.cells().all(|c| c.cost_from_start.is_infinite()
            && c.total_cost.is_infinite()
            && c.predecessor.is_none()));
    }

    #[test]
    fn test_pose_and_goals() {
        let mut g = grid();
        assert!(g.is_goal(CellCoord::new(2, 1)));
        assert!(!g.is_goal(CellCoord::new(1, 2)));
        assert!(g.set_pose(Pose::new(CellCoord::new(5, 5), Direction::East)).is_err());
        g.set_pose(Pose::new(CellCoord::new(3, 2), Direction::East)).unwrap();
        assert_eq!(g.position(), CellCoord::new(3, 2));
        assert_eq!(g.heading(), Direction::East);
    }
}
