//! In-memory mouse for controller tests.
//!
//! Holds the true maze and moves on the same half-cell lattice the compiler
//! reasons about. Every lattice point the body passes is checked: an edge
//! midpoint with a wall or any post is a crash.

use super::MouseApi;
use crate::error::{DhruvaError, Result};
use std::collections::HashMap;
use vastu_maze::{CellCoord, Command, Direction, KinematicPose, MazeGrid, Pose};

pub struct MockMouse {
    truth: MazeGrid,
    body: KinematicPose,
    pub commands: Vec<Command>,
    pub walls_shown: Vec<(i32, i32, Direction)>,
    pub colors: HashMap<(i32, i32), char>,
    pub texts: HashMap<(i32, i32), String>,
    pub sensor_reads: usize,
    pub reset_pending: bool,
}

impl MockMouse {
    /// Mouse standing at the true maze's pose
    pub fn new(truth: MazeGrid) -> Self {
        let body = KinematicPose::from_pose(truth.pose());
        Self {
            truth,
            body,
            commands: Vec::new(),
            walls_shown: Vec::new(),
            colors: HashMap::new(),
            texts: HashMap::new(),
            sensor_reads: 0,
            reset_pending: false,
        }
    }

    /// Build a walled maze starting at (0, 0) facing north
    pub fn maze(
        cols: usize,
        rows: usize,
        goals: Vec<CellCoord>,
        walls: &[(i32, i32, Direction)],
    ) -> MazeGrid {
        let mut truth = MazeGrid::new(cols, rows, Pose::default(), goals).unwrap();
        truth.add_boundary_walls().unwrap();
        for &(x, y, direction) in walls {
            truth.add_wall(CellCoord::new(x, y), direction).unwrap();
        }
        truth
    }

    /// Grid pose when centred on a cell
    pub fn pose(&self) -> Option<Pose> {
        self.body.pose()
    }

    pub fn count(&self, command: Command) -> usize {
        self.commands.iter().filter(|c| **c == command).count()
    }

    fn sense(&mut self, direction: Direction) -> Result<bool> {
        self.sensor_reads += 1;
        let Some(pose) = self.body.pose() else {
            return Err(DhruvaError::Protocol("Sensing between cell centres".into()));
        };
        if !pose.heading.is_cardinal() {
            return Err(DhruvaError::Protocol("Sensing on a diagonal heading".into()));
        }
        Ok(self.truth.wall_exists(pose.position, direction)?)
    }

    fn advance(&mut self, half_steps: i32, name: &str) -> Result<()> {
        let (dx, dy) = self.body.heading.delta();
        for _ in 0..half_steps {
            self.body.x2 += dx;
            self.body.y2 += dy;
            if self.blocked(self.body.x2, self.body.y2) {
                return Err(DhruvaError::Crash(name.to_string()));
            }
        }
        Ok(())
    }

    fn turn(&mut self, command: Command) -> Result<()> {
        self.body.apply(command);
        Ok(())
    }

    /// Whether the body may occupy a lattice point
    fn blocked(&self, x2: i32, y2: i32) -> bool {
        let (odd_x, odd_y) = (x2.rem_euclid(2) == 1, y2.rem_euclid(2) == 1);
        match (odd_x, odd_y) {
            (false, false) => !self.truth.contains(CellCoord::new(x2 / 2, y2 / 2)),
            (true, false) => {
                let west = CellCoord::new((x2 - 1) / 2, y2 / 2);
                self.edge_blocked(west, Direction::East)
            }
            (false, true) => {
                let south = CellCoord::new(x2 / 2, (y2 - 1) / 2);
                self.edge_blocked(south, Direction::North)
            }
            (true, true) => true,
        }
    }

    fn edge_blocked(&self, cell: CellCoord, direction: Direction) -> bool {
        let other = cell.step(direction);
        if self.truth.contains(cell) {
            self.truth.wall_exists(cell, direction).unwrap_or(true)
        } else if self.truth.contains(other) {
            self.truth.wall_exists(other, direction.opposite()).unwrap_or(true)
        } else {
            true
        }
    }
}

impl MouseApi for MockMouse {
    fn maze_width(&mut self) -> Result<usize> {
        Ok(self.truth.cols())
    }

    fn maze_height(&mut self) -> Result<usize> {
        Ok(self.truth.rows())
    }

    fn wall_front(&mut self) -> Result<bool> {
        self.sense(self.body.heading)
    }

    fn wall_left(&mut self) -> Result<bool> {
        self.sense(self.body.heading.left())
    }

    fn wall_right(&mut self) -> Result<bool> {
        self.sense(self.body.heading.right())
    }

    fn move_forward(&mut self) -> Result<()> {
        self.commands.push(Command::Forward);
        self.advance(2, "moveForward")
    }

    fn move_forward_half(&mut self) -> Result<()> {
        self.commands.push(Command::ForwardHalf);
        self.advance(1, "moveForwardHalf")
    }

    fn turn_left(&mut self) -> Result<()> {
        self.commands.push(Command::TurnLeft);
        self.turn(Command::TurnLeft)
    }

    fn turn_right(&mut self) -> Result<()> {
        self.commands.push(Command::TurnRight);
        self.turn(Command::TurnRight)
    }

    fn turn_left_45(&mut self) -> Result<()> {
        self.commands.push(Command::TurnLeft45);
        self.turn(Command::TurnLeft45)
    }

    fn turn_right_45(&mut self) -> Result<()> {
        self.commands.push(Command::TurnRight45);
        self.turn(Command::TurnRight45)
    }

    fn set_wall(&mut self, x: i32, y: i32, direction: Direction) -> Result<()> {
        if !direction.is_cardinal() {
            return Err(DhruvaError::Protocol(format!("Diagonal wall {}", direction)));
        }
        self.walls_shown.push((x, y, direction));
        Ok(())
    }

    fn set_color(&mut self, x: i32, y: i32, color: char) -> Result<()> {
        self.colors.insert((x, y), color);
        Ok(())
    }

    fn clear_color(&mut self, x: i32, y: i32) -> Result<()> {
        self.colors.remove(&(x, y));
        Ok(())
    }

    fn clear_all_color(&mut self) -> Result<()> {
        self.colors.clear();
        Ok(())
    }

    fn set_text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        self.texts.insert((x, y), text.to_string());
        Ok(())
    }

    fn clear_text(&mut self, x: i32, y: i32) -> Result<()> {
        self.texts.remove(&(x, y));
        Ok(())
    }

    fn clear_all_text(&mut self) -> Result<()> {
        self.texts.clear();
        Ok(())
    }

    fn was_reset(&mut self) -> Result<bool> {
        Ok(self.reset_pending)
    }

    fn ack_reset(&mut self) -> Result<()> {
        self.reset_pending = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crash_on_wall() {
        let truth = MockMouse::maze(3, 3, vec![], &[(0, 0, Direction::North)]);
        let mut mouse = MockMouse::new(truth);
        assert!(mouse.wall_front().unwrap());
        assert!(matches!(mouse.move_forward(), Err(DhruvaError::Crash(_))));
    }

    #[test]
    fn test_diagonal_gait_through_edge_midpoints() {
        let truth = MockMouse::maze(3, 3, vec![], &[]);
        let mut mouse = MockMouse::new(truth);
        for command in [
            Command::TurnRight,
            Command::ForwardHalf,
            Command::TurnLeft45,
            Command::ForwardHalf,
            Command::TurnLeft45,
        ] {
            mouse.execute(command).unwrap();
        }
        assert_eq!(mouse.pose(), None);
        mouse.execute(Command::ForwardHalf).unwrap();
        assert_eq!(mouse.pose(), Some(Pose::new(CellCoord::new(1, 1), Direction::North)));
    }

    #[test]
    fn test_diagonal_through_post_crashes() {
        let truth = MockMouse::maze(3, 3, vec![], &[]);
        let mut mouse = MockMouse::new(truth);
        mouse.turn_right_45().unwrap();
        assert!(matches!(mouse.move_forward(), Err(DhruvaError::Crash(_))));
    }

    #[test]
    fn test_sensing_is_relative_to_heading() {
        let truth = MockMouse::maze(3, 3, vec![], &[(1, 1, Direction::West)]);
        let mut mouse = MockMouse::new(truth);
        mouse.turn_right().unwrap();
        mouse.move_forward().unwrap();
        mouse.turn_left().unwrap();
        mouse.move_forward().unwrap();
        // At (1, 1) facing north: west wall is on the left
        assert!(mouse.wall_left().unwrap());
        assert!(!mouse.wall_right().unwrap());
        assert!(!mouse.wall_front().unwrap());
    }
}
