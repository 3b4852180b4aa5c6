//! Frontier selection and the exploration loop.

use std::collections::{BTreeSet, VecDeque};

use vastu_maze::{classify, CellCoord, MazeGrid};

use crate::api::MouseApi;
use crate::error::Result;
use crate::runner::{MazeRunner, TraverseMode};

const FRONTIER_TEXT: &str = "*";

/// Outcome of one exploration pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorationReport {
    /// Cells sensed when the pass finished
    pub cells_explored: usize,
    /// Frontiers dropped because no route to them existed
    pub unreachable_frontiers: usize,
    /// Goal cells reached in the final sweep
    pub goals_visited: usize,
}

/// Breadth-first hop counts from `from` under known walls.
///
/// Indexed like the grid's cells; `None` marks cells that cannot be reached.
/// Only cardinal hops are considered, so every step costs one cell.
pub fn travel_distances(grid: &MazeGrid, from: CellCoord) -> Result<Vec<Option<usize>>> {
    let mut distances = vec![None; grid.cols() * grid.rows()];
    let mut queue = VecDeque::new();

    distances[grid.index(from)?] = Some(0);
    queue.push_back((from, 0usize));

    while let Some((coord, dist)) = queue.pop_front() {
        for neighbor in grid.neighbors(coord, false) {
            let idx = grid.index(neighbor)?;
            if distances[idx].is_some() || !classify(grid, coord, neighbor, false)?.can_move {
                continue;
            }
            distances[idx] = Some(dist + 1);
            queue.push_back((neighbor, dist + 1));
        }
    }

    Ok(distances)
}

/// Frontier-based explorer.
///
/// Frontiers are kept ordered by coordinate so equally distant candidates
/// resolve to the lowest `(x, y)`.
#[derive(Debug)]
pub struct FrontierExplorer {
    avoid_goals: bool,
    frontiers: BTreeSet<CellCoord>,
}

impl FrontierExplorer {
    /// When `avoid_goals` is set, goal cells are neither queued as frontiers
    /// nor crossed on the way to one; they are visited once mapping is done.
    pub fn new(avoid_goals: bool) -> Self {
        Self {
            avoid_goals,
            frontiers: BTreeSet::new(),
        }
    }

    /// Closest reachable frontier, or `None` when none is reachable
    fn pick_next(&self, grid: &MazeGrid) -> Result<Option<CellCoord>> {
        let distances = travel_distances(grid, grid.position())?;
        let mut best: Option<(usize, CellCoord)> = None;

        for &frontier in &self.frontiers {
            let Some(dist) = distances[grid.index(frontier)?] else {
                continue;
            };
            if best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, frontier));
            }
        }

        Ok(best.map(|(_, coord)| coord))
    }

    /// Map the maze, then drive through the goal cells.
    pub fn explore<A: MouseApi>(&mut self, runner: &mut MazeRunner<A>) -> Result<ExplorationReport> {
        let mut report = ExplorationReport::default();
        let mode = TraverseMode::Explore {
            avoid_goals: self.avoid_goals,
        };

        let start = runner.grid().position();
        runner.grid_mut().set_explored(start, true)?;
        self.frontiers.clear();
        self.frontiers.insert(start);

        tracing::info!(
            "Exploring from {} (avoid goals: {})",
            start,
            self.avoid_goals
        );

        while let Some(next) = self.pick_next(runner.grid())? {
            if !runner.traverse_to(&[next], mode)? {
                tracing::warn!("Frontier {} unreachable, dropping it", next);
                self.drop_frontier(runner, next)?;
                report.unreachable_frontiers += 1;
                continue;
            }

            runner.sense_walls()?;
            let here = runner.grid().position();
            self.drop_frontier(runner, here)?;

            for neighbor in runner.grid().neighbors(here, false) {
                if self.is_new_frontier(runner.grid(), here, neighbor)? {
                    self.frontiers.insert(neighbor);
                    if runner.display().show_frontiers {
                        runner
                            .api_mut()
                            .set_text(neighbor.x, neighbor.y, FRONTIER_TEXT)?;
                    }
                }
            }
            tracing::debug!(
                "Sensed {}, {} frontiers pending",
                here,
                self.frontiers.len()
            );
        }

        if !self.frontiers.is_empty() {
            tracing::warn!(
                "{} frontiers left with no known route",
                self.frontiers.len()
            );
        }

        let goals = runner.grid().goals().to_vec();
        let sweep = TraverseMode::Explore { avoid_goals: false };
        for goal in goals {
            if runner.traverse_to(&[goal], sweep)? {
                runner.sense_walls()?;
                report.goals_visited += 1;
            } else {
                tracing::warn!("Goal {} unreachable", goal);
            }
        }

        report.cells_explored = runner.grid().explored_count();
        Ok(report)
    }

    fn is_new_frontier(&self, grid: &MazeGrid, from: CellCoord, cell: CellCoord) -> Result<bool> {
        if grid.is_explored(cell)? || self.frontiers.contains(&cell) {
            return Ok(false);
        }
        if self.avoid_goals && grid.is_goal(cell) {
            return Ok(false);
        }
        Ok(classify(grid, from, cell, false)?.can_move)
    }

    fn drop_frontier<A: MouseApi>(
        &mut self,
        runner: &mut MazeRunner<A>,
        cell: CellCoord,
    ) -> Result<()> {
        if self.frontiers.remove(&cell) && runner.display().show_frontiers {
            runner.api_mut().clear_text(cell.x, cell.y)?;
        }
        Ok(())
    }
}
