//! A* pathfinding over the maze grid.
//!
//! Implements best-first search with:
//! - Octile heuristic (admissible and consistent for 1/√2 step costs)
//! - Lazy deletion of stale frontier entries
//! - Movement legality from the feasibility classifier
//! - Optional exclusion of goal cells other than the current target

use crate::core::CellCoord;
use crate::error::{MazeError, Result};
use crate::grid::MazeGrid;
use crate::movement::classify;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Two path costs closer than this are treated as equal when ranking goals.
const COST_EPSILON: f64 = 1e-9;

/// A node in the A* frontier
#[derive(Clone, Debug)]
struct AStarNode {
    coord: CellCoord,
    f_cost: f64,
    seq: u64, // Insertion order, breaks f ties deterministically
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord && self.seq == other.seq
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Allow diagonal hops (8-connected vs 4-connected)
    pub diagonals_allowed: bool,
    /// Never route through goal cells other than the current target
    pub avoid_goal_cells: bool,
    /// Maximum number of cells to expand before giving up
    pub max_iterations: Option<usize>,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            diagonals_allowed: false,
            avoid_goal_cells: false,
            max_iterations: None,
        }
    }
}

impl AStarConfig {
    /// Eight-connected search
    pub fn with_diagonals() -> Self {
        Self {
            diagonals_allowed: true,
            ..Default::default()
        }
    }

    /// Route around goal cells other than the target
    pub fn avoiding_goals(mut self, avoid: bool) -> Self {
        self.avoid_goal_cells = avoid;
        self
    }

    /// Cap the number of expanded cells
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }
}

/// Result of a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedPath {
    /// Cells from (excluding) the start to the goal
    pub cells: Vec<CellCoord>,
    /// Total stepped cost (1 per cardinal hop, √2 per diagonal hop)
    pub cost: f64,
    /// Number of cells expanded during search
    pub nodes_expanded: usize,
}

impl PlannedPath {
    /// Number of hops
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the start already was the goal
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Final cell, if any hop is needed
    pub fn destination(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }
}

/// A* pathfinder.
///
/// The planner holds no per-search state; every call resets and reuses the
/// grid's scratch fields, so it borrows the grid mutably.
#[derive(Clone, Debug, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    /// Create a new A* planner
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }

    /// Planner configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path from the mouse's current cell to `goal`.
    ///
    /// Returns `Ok(None)` when the goal is unreachable under current wall
    /// knowledge and `Ok(Some(path))` with an empty path when the mouse is
    /// already there.
    pub fn find_path(&self, grid: &mut MazeGrid, goal: CellCoord) -> Result<Option<PlannedPath>> {
        let start = grid.position();
        self.find_path_from(grid, start, goal)
    }

    /// Find a path between two arbitrary cells.
    pub fn find_path_from(
        &self,
        grid: &mut MazeGrid,
        start: CellCoord,
        goal: CellCoord,
    ) -> Result<Option<PlannedPath>> {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        grid.index(goal)?;
        grid.reset_search_state();

        let mut finalized = vec![false; grid.cols() * grid.rows()];
        let mut open_set = BinaryHeap::new();
        let mut seq = 0u64;

        let h_start = Self::heuristic(start, goal);
        {
            let cell = grid.cell_mut(start)?;
            cell.cost_from_start = 0.0;
            cell.total_cost = h_start;
        }
        open_set.push(AStarNode {
            coord: start,
            f_cost: h_start,
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Goal reached
            if current.coord == goal {
                return self
                    .reconstruct_path(grid, start, goal, nodes_expanded)
                    .map(Some);
            }

            let current_idx = grid.index(current.coord)?;
            if finalized[current_idx] {
                continue;
            }
            finalized[current_idx] = true;

            nodes_expanded += 1;
            if let Some(max) = self.config.max_iterations {
                if nodes_expanded > max {
                    debug!(
                        "[AStar] FAILED: MaxIterationsExceeded ({} nodes) toward {}",
                        nodes_expanded, goal
                    );
                    return Err(MazeError::SearchLimitExceeded {
                        goal,
                        expanded: nodes_expanded,
                    });
                }
            }

            let current_g = grid.cell(current.coord)?.cost_from_start;

            for neighbor in grid.neighbors(current.coord, self.config.diagonals_allowed) {
                if finalized[grid.index(neighbor)?] {
                    continue;
                }

                if self.config.avoid_goal_cells && neighbor != goal && grid.is_goal(neighbor) {
                    continue;
                }

                let movement = classify(grid, current.coord, neighbor, self.config.diagonals_allowed)?;
                if !movement.can_move {
                    continue;
                }

                let tentative_g = current_g + current.coord.euclidean_distance(&neighbor);

                let cell = grid.cell_mut(neighbor)?;
                if tentative_g < cell.cost_from_start {
                    let f = tentative_g + Self::heuristic(neighbor, goal);
                    cell.cost_from_start = tentative_g;
                    cell.total_cost = f;
                    cell.predecessor = Some(current.coord);

                    seq += 1;
                    open_set.push(AStarNode {
                        coord: neighbor,
                        f_cost: f,
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath from {} to {} after expanding {} nodes",
            start, goal, nodes_expanded
        );
        Ok(None)
    }

    /// Run a full search per goal and keep the cheapest.
    ///
    /// Goals are tried in the given order and a later goal only wins with a
    /// strictly lower cost, so ties go to the earliest goal.
    pub fn best_path(
        &self,
        grid: &mut MazeGrid,
        goals: &[CellCoord],
    ) -> Result<Option<(CellCoord, PlannedPath)>> {
        let mut best: Option<(CellCoord, PlannedPath)> = None;

        for &goal in goals {
            let Some(path) = self.find_path(grid, goal)? else {
                continue;
            };

            let better = match &best {
                Some((_, current)) => path.cost < current.cost - COST_EPSILON,
                None => true,
            };
            if better {
                best = Some((goal, path));
            }
        }

        if let Some((goal, path)) = &best {
            debug!(
                "[AStar] best goal {} of {}: {} hops, cost={:.3}",
                goal,
                goals.len(),
                path.len(),
                path.cost
            );
        }
        Ok(best)
    }

    /// Octile distance
    fn heuristic(from: CellCoord, to: CellCoord) -> f64 {
        from.octile_distance(&to)
    }

    /// Walk predecessor links back from the goal.
    ///
    /// A chain that dead-ends or runs longer than the grid has cells means the
    /// scratch state is corrupt.
    fn reconstruct_path(
        &self,
        grid: &MazeGrid,
        start: CellCoord,
        goal: CellCoord,
        nodes_expanded: usize,
    ) -> Result<PlannedPath> {
        let cost = grid.cell(goal)?.cost_from_start;
        let limit = grid.cols() * grid.rows();

        let mut cells = Vec::new();
        let mut current = goal;

        while current != start {
            if cells.len() >= limit {
                return Err(MazeError::BrokenPredecessorChain { start, goal, at: current });
            }
            cells.push(current);
            current = grid
                .cell(current)?
                .predecessor
                .ok_or(MazeError::BrokenPredecessorChain { start, goal, at: current })?;
        }
        cells.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            cells.len(),
            cost,
            nodes_expanded
        );

        Ok(PlannedPath {
            cells,
            cost,
            nodes_expanded,
        })
    }
}
