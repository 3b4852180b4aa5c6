//! Maze configuration section.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CellCoord, Direction, Pose};
use crate::grid::MazeGrid;

use super::defaults;
use super::error::ConfigLoadError;

/// Maze dimensions, goals and start pose
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeSection {
    /// Maze width (cells)
    #[serde(default = "defaults::maze_size")]
    pub cols: usize,

    /// Maze height (cells)
    #[serde(default = "defaults::maze_size")]
    pub rows: usize,

    /// Goal cells, in tie-break order
    #[serde(default = "defaults::goals")]
    pub goals: Vec<CellCoord>,

    /// Start cell
    #[serde(default = "defaults::start")]
    pub start: CellCoord,

    /// Start heading label: n, e, s or w
    #[serde(default = "defaults::heading")]
    pub heading: String,

    /// Wall the outer edge before the run starts
    #[serde(default = "defaults::enabled")]
    pub boundary_walls: bool,
}

impl Default for MazeSection {
    fn default() -> Self {
        Self {
            cols: defaults::maze_size(),
            rows: defaults::maze_size(),
            goals: defaults::goals(),
            start: defaults::start(),
            heading: defaults::heading(),
            boundary_walls: true,
        }
    }
}

impl MazeSection {
    /// Load a standalone maze section from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Parse from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigLoadError> {
        let section: Self =
            toml::from_str(toml_str).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        section.validate()?;
        Ok(section)
    }

    /// Start heading as a direction
    pub fn start_heading(&self) -> Result<Direction, ConfigLoadError> {
        Direction::from_label(&self.heading).map_err(|e| ConfigLoadError::Invalid(e.to_string()))
    }

    /// Start pose
    pub fn start_pose(&self) -> Result<Pose, ConfigLoadError> {
        Ok(Pose::new(self.start, self.start_heading()?))
    }

    /// Reject anything the grid would refuse later
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigLoadError::Invalid(format!(
                "maze must be at least 1x1, got {}x{}",
                self.cols, self.rows
            )));
        }
        if self.cols > i32::MAX as usize || self.rows > i32::MAX as usize {
            return Err(ConfigLoadError::Invalid(format!(
                "maze {}x{} is too large",
                self.cols, self.rows
            )));
        }
        if self.goals.is_empty() {
            return Err(ConfigLoadError::Invalid("no goal cells".to_string()));
        }

        let inside = |c: &CellCoord| {
            c.x >= 0 && c.y >= 0 && (c.x as usize) < self.cols && (c.y as usize) < self.rows
        };
        if !inside(&self.start) {
            return Err(ConfigLoadError::Invalid(format!(
                "start {} is outside the {}x{} maze",
                self.start, self.cols, self.rows
            )));
        }
        if let Some(goal) = self.goals.iter().find(|g| !inside(g)) {
            return Err(ConfigLoadError::Invalid(format!(
                "goal {} is outside the {}x{} maze",
                goal, self.cols, self.rows
            )));
        }

        let heading = self.start_heading()?;
        if !heading.is_cardinal() {
            return Err(ConfigLoadError::Invalid(format!(
                "start heading {} is diagonal; the mouse must start facing n, e, s or w",
                heading
            )));
        }
        Ok(())
    }

    /// Build an empty grid for this maze
    pub fn to_grid(&self) -> Result<MazeGrid, ConfigLoadError> {
        self.validate()?;
        let invalid = |e: crate::MazeError| ConfigLoadError::Invalid(e.to_string());

        let mut grid =
            MazeGrid::new(self.cols, self.rows, self.start_pose()?, self.goals.clone())
                .map_err(invalid)?;
        if self.boundary_walls {
            grid.add_boundary_walls().map_err(invalid)?;
        }
        Ok(grid)
    }
}
