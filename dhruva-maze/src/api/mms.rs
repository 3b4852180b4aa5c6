//! mms simulator client.
//!
//! The simulator runs the controller as a child process. Every request is
//! one line on stdout; queries and motion commands are answered with one
//! line on stdin, display commands are fire-and-forget. Diagnostics must go
//! to stderr so they never interleave with the protocol.

use super::MouseApi;
use crate::error::{DhruvaError, Result};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::trace;
use vastu_maze::{Direction, DirectionKind};

/// Line-protocol client for the mms simulator
pub struct MmsClient<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl MmsClient<StdinLock<'static>, Stdout> {
    /// Client over the process's own stdin/stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> MmsClient<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Release the underlying streams
    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write one command line
    fn send(&mut self, command: &str) -> Result<()> {
        trace!("mms <- {}", command);
        writeln!(self.writer, "{}", command)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write one command line and read the reply
    fn request(&mut self, command: &str) -> Result<String> {
        self.send(command)?;
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(DhruvaError::Protocol(format!(
                "Simulator closed the stream while waiting for {}",
                command
            )));
        }
        let reply = self.line.trim().to_string();
        trace!("mms -> {}", reply);
        Ok(reply)
    }

    fn request_usize(&mut self, command: &str) -> Result<usize> {
        let reply = self.request(command)?;
        reply.parse().map_err(|_| {
            DhruvaError::Protocol(format!("Expected an integer for {}, got {:?}", command, reply))
        })
    }

    fn request_bool(&mut self, command: &str) -> Result<bool> {
        match self.request(command)?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(DhruvaError::Protocol(format!(
                "Expected true/false for {}, got {:?}",
                command, other
            ))),
        }
    }

    fn request_ack(&mut self, command: &str) -> Result<()> {
        match self.request(command)?.as_str() {
            "ack" => Ok(()),
            "crash" => Err(DhruvaError::Crash(command.to_string())),
            other => Err(DhruvaError::Protocol(format!(
                "Expected ack for {}, got {:?}",
                command, other
            ))),
        }
    }
}

impl<R: BufRead, W: Write> MouseApi for MmsClient<R, W> {
    fn maze_width(&mut self) -> Result<usize> {
        self.request_usize("mazeWidth")
    }

    fn maze_height(&mut self) -> Result<usize> {
        self.request_usize("mazeHeight")
    }

    fn wall_front(&mut self) -> Result<bool> {
        self.request_bool("wallFront")
    }

    fn wall_left(&mut self) -> Result<bool> {
        self.request_bool("wallLeft")
    }

    fn wall_right(&mut self) -> Result<bool> {
        self.request_bool("wallRight")
    }

    fn move_forward(&mut self) -> Result<()> {
        self.request_ack("moveForward")
    }

    fn move_forward_half(&mut self) -> Result<()> {
        self.request_ack("moveForwardHalf")
    }

    fn turn_left(&mut self) -> Result<()> {
        self.request_ack("turnLeft")
    }

    fn turn_right(&mut self) -> Result<()> {
        self.request_ack("turnRight")
    }

    fn turn_left_45(&mut self) -> Result<()> {
        self.request_ack("turnLeft45")
    }

    fn turn_right_45(&mut self) -> Result<()> {
        self.request_ack("turnRight45")
    }

    fn set_wall(&mut self, x: i32, y: i32, direction: Direction) -> Result<()> {
        match direction.kind() {
            DirectionKind::Cardinal(_) => {
                self.send(&format!("setWall {} {} {}", x, y, direction.label()))
            }
            DirectionKind::Diagonal => Err(DhruvaError::Protocol(format!(
                "No wall slot on the {} side of a cell",
                direction
            ))),
        }
    }

    fn set_color(&mut self, x: i32, y: i32, color: char) -> Result<()> {
        self.send(&format!("setColor {} {} {}", x, y, color))
    }

    fn clear_color(&mut self, x: i32, y: i32) -> Result<()> {
        self.send(&format!("clearColor {} {}", x, y))
    }

    fn clear_all_color(&mut self) -> Result<()> {
        self.send("clearAllColor")
    }

    fn set_text(&mut self, x: i32, y: i32, text: &str) -> Result<()> {
        self.send(&format!("setText {} {} {}", x, y, text))
    }

    fn clear_text(&mut self, x: i32, y: i32) -> Result<()> {
        self.send(&format!("clearText {} {}", x, y))
    }

    fn clear_all_text(&mut self) -> Result<()> {
        self.send("clearAllText")
    }

    fn was_reset(&mut self) -> Result<bool> {
        self.request_bool("wasReset")
    }

    fn ack_reset(&mut self) -> Result<()> {
        self.request_ack("ackReset")
    }
}
