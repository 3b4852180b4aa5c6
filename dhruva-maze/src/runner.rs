//! Run orchestration: sensing, traversal and the three-phase run.
//!
//! The controller keeps its own [`MazeGrid`] of what has been sensed so far.
//! Traversal plans on that grid, executes the plan one command at a time and
//! replans whenever the mouse steps into a cell it has not sensed yet. On
//! the speed run the maze is treated as fully known and the whole plan is
//! rewritten into diagonal gaits and executed in one go.

use crate::api::MouseApi;
use crate::config::{DhruvaConfig, DisplayConfig, RunConfig};
use crate::error::Result;
use crate::exploration::FrontierExplorer;
use std::time::Duration;
use tracing::{debug, info, warn};
use vastu_maze::{
    rewrite_diagonals, translate_path, AStarConfig, AStarPlanner, CellCoord, Command, Direction,
    KinematicPose, MazeGrid, Pose,
};

/// How a traversal plans and executes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraverseMode {
    /// Cardinal moves, replanning in unsensed cells
    Explore {
        /// Route around goal cells that are not the target
        avoid_goals: bool,
    },
    /// Cardinal moves back to the start
    Return,
    /// Fully known maze, optionally with diagonal gaits
    SpeedRun {
        /// Plan diagonal hops and rewrite them into 45° gaits
        diagonals: bool,
    },
}

impl TraverseMode {
    fn planner_config(self) -> AStarConfig {
        match self {
            TraverseMode::Explore { avoid_goals } => {
                AStarConfig::default().avoiding_goals(avoid_goals)
            }
            TraverseMode::Return => AStarConfig::default(),
            TraverseMode::SpeedRun { diagonals: true } => AStarConfig::with_diagonals(),
            TraverseMode::SpeedRun { diagonals: false } => AStarConfig::default(),
        }
    }
}

/// Sends commands to the mouse and commits its pose to the grid.
///
/// The body is tracked on the half-cell lattice; the grid pose only changes
/// when the body is centred on a cell.
struct CommandExecutor {
    body: KinematicPose,
}

impl CommandExecutor {
    fn new(pose: Pose) -> Self {
        Self {
            body: KinematicPose::from_pose(pose),
        }
    }

    fn execute<A: MouseApi>(
        &mut self,
        api: &mut A,
        grid: &mut MazeGrid,
        command: Command,
    ) -> Result<()> {
        api.execute(command)?;
        self.body.apply(command);
        if let Some(pose) = self.body.pose() {
            grid.set_pose(pose)?;
        }
        Ok(())
    }

    fn pose(&self) -> Option<Pose> {
        self.body.pose()
    }
}

/// Controller state for one mouse
pub struct MazeRunner<A: MouseApi> {
    api: A,
    grid: MazeGrid,
    start: Pose,
    run: RunConfig,
    display: DisplayConfig,
}

impl<A: MouseApi> MazeRunner<A> {
    pub fn new(api: A, config: &DhruvaConfig) -> Result<Self> {
        let grid = config.maze.to_grid()?;
        Ok(Self {
            api,
            start: grid.pose(),
            grid,
            run: config.run.clone(),
            display: config.display.clone(),
        })
    }

    /// What the controller knows about the maze
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut MazeGrid {
        &mut self.grid
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub(crate) fn api_mut(&mut self) -> &mut A {
        &mut self.api
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Explore, return to start, then race to the goals
    pub fn run(&mut self) -> Result<()> {
        let goals = self.grid.goals().to_vec();
        let start = self.start.position;

        self.handle_reset()?;
        self.setup_display(&goals)?;
        if self.run.explore {
            let report =
                FrontierExplorer::new(self.run.explore_avoid_goals).explore(self)?;
            info!(
                "Exploration complete: {} cells sensed, {} goals visited, {} frontiers unreachable",
                report.cells_explored, report.goals_visited, report.unreachable_frontiers
            );
            debug!("Known maze:\n{}", self.grid);
        }
        pause(self.run.pause_after_explore_ms);

        self.handle_reset()?;
        self.setup_display(&[start])?;
        if !self.traverse_to(&[start], TraverseMode::Return)? {
            warn!("Start cell unreachable from {}", self.grid.position());
        }
        pause(self.run.pause_after_return_ms);

        self.handle_reset()?;
        self.setup_display(&goals)?;
        self.grid.mark_all_explored();
        let mode = TraverseMode::SpeedRun {
            diagonals: self.run.speed_run_diagonals,
        };
        if self.traverse_to(&goals, mode)? {
            info!("Speed run finished at {}", self.grid.position());
        } else {
            warn!("No route to any goal from {}", self.grid.position());
        }
        Ok(())
    }

    /// Acknowledge a simulator reset and put the mouse back at the start
    fn handle_reset(&mut self) -> Result<()> {
        if self.api.was_reset()? {
            self.api.ack_reset()?;
            self.grid.set_pose(self.start)?;
            info!("Simulator reset, mouse back at {}", self.start);
        }
        Ok(())
    }

    /// Repaint the maze view for a new phase
    pub fn setup_display(&mut self, targets: &[CellCoord]) -> Result<()> {
        self.api.clear_all_color()?;
        self.api.clear_all_text()?;

        let (cols, rows) = (self.grid.cols() as i32, self.grid.rows() as i32);
        for y in 0..rows {
            for x in 0..cols {
                let coord = CellCoord::new(x, y);
                for direction in Direction::CARDINALS {
                    if self.grid.wall_exists(coord, direction)? {
                        self.api.set_wall(x, y, direction)?;
                    }
                }
                if self.display.show_grid_labels {
                    self.api.set_text(x, y, &format!("{},{}", x, y))?;
                }
            }
        }

        let start = self.start.position;
        self.api.set_color(start.x, start.y, self.display.start_color)?;
        self.api.set_text(start.x, start.y, &self.display.start_text)?;
        for target in targets {
            self.api.set_color(target.x, target.y, self.display.goal_color)?;
            self.api.set_text(target.x, target.y, &self.display.goal_text)?;
        }
        Ok(())
    }

    /// Read the three wall sensors, record what they see and mark the cell
    /// explored.
    pub fn sense_walls(&mut self) -> Result<()> {
        let Pose { position, heading } = self.grid.pose();
        let readings = [
            (heading, self.api.wall_front()?),
            (heading.left(), self.api.wall_left()?),
            (heading.right(), self.api.wall_right()?),
        ];

        for (direction, present) in readings {
            if present {
                self.grid.add_wall(position, direction)?;
                self.api.set_wall(position.x, position.y, direction)?;
            }
        }
        self.grid.set_explored(position, true)?;
        Ok(())
    }

    /// Drive to the nearest of `targets`.
    ///
    /// Returns `Ok(false)` when no target is reachable under known walls.
    pub fn traverse_to(&mut self, targets: &[CellCoord], mode: TraverseMode) -> Result<bool> {
        let mut planner_config = mode.planner_config();
        if let Some(max) = self.run.max_search_iterations {
            planner_config = planner_config.with_max_iterations(max);
        }
        let planner = AStarPlanner::new(planner_config);
        let max_plans = self.grid.cols() * self.grid.rows() * 4;

        for _ in 0..max_plans {
            if targets.contains(&self.grid.position()) {
                return Ok(true);
            }
            self.sense_walls()?;

            let Some((goal, path)) = planner.best_path(&mut self.grid, targets)? else {
                debug!("No path from {} to {:?}", self.grid.position(), targets);
                return Ok(false);
            };
            debug!(
                "Planned {} hops to {} (cost {:.2}, {} expanded)",
                path.len(),
                goal,
                path.cost,
                path.nodes_expanded
            );
            self.show_path(&path.cells, mode)?;

            let pose = self.grid.pose();
            let naive = translate_path(&self.grid, pose, &path.cells)?;
            let mut executor = CommandExecutor::new(pose);

            match mode {
                TraverseMode::SpeedRun { diagonals: true } => {
                    let plan = rewrite_diagonals(pose, &naive)?;
                    info!(
                        "Speed run to {}: {} commands ({} before gait rewrite)",
                        goal,
                        plan.commands.len(),
                        naive.len()
                    );
                    for command in plan.commands {
                        executor.execute(&mut self.api, &mut self.grid, command)?;
                    }
                    if executor.pose() != Some(plan.end_pose) {
                        warn!(
                            "Gait run ended at {:?}, expected {}",
                            executor.pose(),
                            plan.end_pose
                        );
                    }
                }
                _ => {
                    for command in naive {
                        executor.execute(&mut self.api, &mut self.grid, command)?;
                        let here = self.grid.position();
                        if command == Command::Forward && !self.grid.is_explored(here)? {
                            debug!("Entered unsensed cell {}, replanning", here);
                            break;
                        }
                    }
                }
            }
        }

        warn!("Gave up on {:?} after {} plans", targets, max_plans);
        Ok(false)
    }

    fn show_path(&mut self, cells: &[CellCoord], mode: TraverseMode) -> Result<()> {
        if !self.display.show_path {
            return Ok(());
        }
        let color = match mode {
            TraverseMode::SpeedRun { .. } => self.display.fast_path_color,
            _ => self.display.path_color,
        };
        for cell in cells {
            self.api.set_color(cell.x, cell.y, color)?;
        }
        Ok(())
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
