//! Motion command tokens.

use std::fmt;
use std::str::FromStr;

use crate::core::TurnSide;
use crate::error::{MazeError, Result};

/// One actuation command.
///
/// The naive translator only produces [`Forward`](Command::Forward),
/// [`TurnLeft`](Command::TurnLeft) and [`TurnRight`](Command::TurnRight); the
/// 45° turns and half-cell advance appear after the diagonal-gait rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance one cell along the heading (`F`)
    Forward,
    /// Rotate 90° counter-clockwise (`L`)
    TurnLeft,
    /// Rotate 90° clockwise (`R`)
    TurnRight,
    /// Rotate 45° counter-clockwise (`L45`)
    TurnLeft45,
    /// Rotate 45° clockwise (`R45`)
    TurnRight45,
    /// Advance half a cell along the heading (`FH`)
    ForwardHalf,
}

impl Command {
    /// Short text label
    pub fn label(self) -> &'static str {
        match self {
            Command::Forward => "F",
            Command::TurnLeft => "L",
            Command::TurnRight => "R",
            Command::TurnLeft45 => "L45",
            Command::TurnRight45 => "R45",
            Command::ForwardHalf => "FH",
        }
    }

    /// 90° turn toward `side`
    pub fn turn(side: TurnSide) -> Self {
        match side {
            TurnSide::Left => Command::TurnLeft,
            TurnSide::Right => Command::TurnRight,
        }
    }

    /// Swap left and right
    pub fn mirror(self) -> Self {
        match self {
            Command::TurnLeft => Command::TurnRight,
            Command::TurnRight => Command::TurnLeft,
            Command::TurnLeft45 => Command::TurnRight45,
            Command::TurnRight45 => Command::TurnLeft45,
            other => other,
        }
    }

    /// `(left, right)` 45° half-steps this command rotates by
    pub fn rotation_steps(self) -> (u8, u8) {
        match self {
            Command::TurnLeft => (2, 0),
            Command::TurnRight => (0, 2),
            Command::TurnLeft45 => (1, 0),
            Command::TurnRight45 => (0, 1),
            Command::Forward | Command::ForwardHalf => (0, 0),
        }
    }

    /// Part of the naive `{F, L, R}` alphabet
    pub fn is_naive(self) -> bool {
        matches!(self, Command::Forward | Command::TurnLeft | Command::TurnRight)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Command {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "F" => Ok(Command::Forward),
            "L" => Ok(Command::TurnLeft),
            "R" => Ok(Command::TurnRight),
            "L45" => Ok(Command::TurnLeft45),
            "R45" => Ok(Command::TurnRight45),
            "FH" => Ok(Command::ForwardHalf),
            other => Err(MazeError::InvalidCommand(other.to_string())),
        }
    }
}

/// Ordered command stream with a `#`-terminated text form (`R#F#L#F#`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandSequence(Vec<Command>);

impl CommandSequence {
    /// Wrap a command list
    pub fn new(commands: Vec<Command>) -> Self {
        Self(commands)
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no commands
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Commands as a slice
    pub fn as_slice(&self) -> &[Command] {
        &self.0
    }

    /// Unwrap into the command list
    pub fn into_inner(self) -> Vec<Command> {
        self.0
    }
}

impl From<Vec<Command>> for CommandSequence {
    fn from(commands: Vec<Command>) -> Self {
        Self(commands)
    }
}

impl From<&[Command]> for CommandSequence {
    fn from(commands: &[Command]) -> Self {
        Self(commands.to_vec())
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CommandSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.0 {
            write!(f, "{}#", command)?;
        }
        Ok(())
    }
}

impl FromStr for CommandSequence {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        s.split('#')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Command::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for command in [
            Command::Forward,
            Command::TurnLeft,
            Command::TurnRight,
            Command::TurnLeft45,
            Command::TurnRight45,
            Command::ForwardHalf,
        ] {
            assert_eq!(command.label().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_sequence_text() {
        let seq: CommandSequence = "R#F#L45#FH#".parse().unwrap();
        assert_eq!(
            seq.as_slice(),
            &[
                Command::TurnRight,
                Command::Forward,
                Command::TurnLeft45,
                Command::ForwardHalf
            ]
        );
        assert_eq!(seq.to_string(), "R#F#L45#FH#");
        assert!("".parse::<CommandSequence>().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_token() {
        assert_eq!(
            "F#X#".parse::<CommandSequence>(),
            Err(MazeError::InvalidCommand("X".to_string()))
        );
    }

    #[test]
    fn test_mirror() {
        assert_eq!(Command::TurnLeft.mirror(), Command::TurnRight);
        assert_eq!(Command::TurnRight45.mirror(), Command::TurnLeft45);
        assert_eq!(Command::ForwardHalf.mirror(), Command::ForwardHalf);
        assert!(Command::Forward.is_naive());
        assert!(!Command::ForwardHalf.is_naive());
    }
}
