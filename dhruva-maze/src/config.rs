//! Configuration loading for DhruvaMaze

use crate::error::{DhruvaError, Result};
use serde::Deserialize;
use std::path::Path;
use vastu_maze::MazeSection;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DhruvaConfig {
    #[serde(default)]
    pub maze: MazeSection,
    #[serde(default)]
    pub mouse: MouseConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Mouse identity
#[derive(Clone, Debug, Deserialize)]
pub struct MouseConfig {
    /// Name shown in the start banner (default: Ratawoulfie)
    #[serde(default = "default_mouse_name")]
    pub name: String,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            name: default_mouse_name(),
        }
    }
}

/// Run phases and search settings
#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    /// Map the maze with frontier exploration before racing (default: true)
    #[serde(default = "default_true")]
    pub explore: bool,

    /// Leave the goal cells for last while exploring (default: true)
    #[serde(default = "default_true")]
    pub explore_avoid_goals: bool,

    /// Use diagonal gaits on the speed run (default: true)
    #[serde(default = "default_true")]
    pub speed_run_diagonals: bool,

    /// Cap on cells expanded per A* search (default: unlimited)
    #[serde(default)]
    pub max_search_iterations: Option<usize>,

    /// Pause after exploration in milliseconds (default: 2000)
    #[serde(default = "default_pause_after_explore")]
    pub pause_after_explore_ms: u64,

    /// Pause after returning to start in milliseconds (default: 500)
    #[serde(default = "default_pause_after_return")]
    pub pause_after_return_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            explore: true,
            explore_avoid_goals: true,
            speed_run_diagonals: true,
            max_search_iterations: None,
            pause_after_explore_ms: default_pause_after_explore(),
            pause_after_return_ms: default_pause_after_return(),
        }
    }
}

/// Simulator display settings
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    /// Label every cell with its coordinates (default: true)
    #[serde(default = "default_true")]
    pub show_grid_labels: bool,

    /// Colour planned paths (default: false)
    #[serde(default)]
    pub show_path: bool,

    /// Mark pending frontier cells with `*` (default: true)
    #[serde(default = "default_true")]
    pub show_frontiers: bool,

    #[serde(default = "default_start_color")]
    pub start_color: char,
    #[serde(default = "default_start_text")]
    pub start_text: String,
    #[serde(default = "default_goal_color")]
    pub goal_color: char,
    #[serde(default = "default_goal_text")]
    pub goal_text: String,
    #[serde(default = "default_path_color")]
    pub path_color: char,
    #[serde(default = "default_fast_path_color")]
    pub fast_path_color: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid_labels: true,
            show_path: false,
            show_frontiers: true,
            start_color: default_start_color(),
            start_text: default_start_text(),
            goal_color: default_goal_color(),
            goal_text: default_goal_text(),
            path_color: default_path_color(),
            fast_path_color: default_fast_path_color(),
        }
    }
}

// Default value functions
fn default_mouse_name() -> String {
    "Ratawoulfie".to_string()
}
fn default_true() -> bool {
    true
}
fn default_pause_after_explore() -> u64 {
    2000
}
fn default_pause_after_return() -> u64 {
    500
}

// mms colour codes
fn default_start_color() -> char {
    'B'
}
fn default_start_text() -> String {
    "Start".to_string()
}
fn default_goal_color() -> char {
    'G'
}
fn default_goal_text() -> String {
    "Goal".to_string()
}
fn default_path_color() -> char {
    'A'
}
fn default_fast_path_color() -> char {
    'a'
}

impl DhruvaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DhruvaError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DhruvaConfig = toml::from_str(content)?;
        config.maze.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vastu_maze::CellCoord;

    #[test]
    fn test_defaults() {
        let config = DhruvaConfig::default();
        assert_eq!(config.maze.cols, 16);
        assert_eq!(config.mouse.name, "Ratawoulfie");
        assert!(config.run.explore);
        assert_eq!(config.display.goal_color, 'G');
    }

    #[test]
    fn test_partial_toml() {
        let config = DhruvaConfig::from_toml(
            r#"
            [maze]
            cols = 8
            rows = 8
            goals = [{ x = 4, y = 4 }]

            [run]
            speed_run_diagonals = false
            pause_after_explore_ms = 0

            [display]
            path_color = "r"
            "#,
        )
        .unwrap();

        assert_eq!(config.maze.goals, vec![CellCoord::new(4, 4)]);
        assert!(!config.run.speed_run_diagonals);
        assert_eq!(config.run.pause_after_explore_ms, 0);
        assert_eq!(config.run.pause_after_return_ms, 500);
        assert_eq!(config.display.path_color, 'r');
        assert_eq!(config.display.start_text, "Start");
    }

    #[test]
    fn test_invalid_maze_rejected() {
        let result = DhruvaConfig::from_toml(
            r#"
            [maze]
            cols = 4
            rows = 4
            "#,
        );
        // Default goals sit outside a 4x4 maze
        assert!(matches!(result, Err(DhruvaError::Config(_))));
    }
}
