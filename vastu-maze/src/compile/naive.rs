//! Path to `{F, L, R}` token translation.

use crate::core::{CellCoord, Direction, Pose};
use crate::error::{MazeError, Result};
use crate::grid::MazeGrid;
use crate::movement::classify;

use super::Command;

/// Translate a cell path into naive rotate/advance tokens.
///
/// `path` excludes the start cell, which is `pose.position`. Every hop
/// becomes zero to two 90° turns followed by one `F`. A diagonal hop is
/// decomposed into two cardinal hops through the corner cell the
/// classifier selects for it.
///
/// Works on a copy of `pose`; the caller's state is never touched.
pub fn translate_path(grid: &MazeGrid, pose: Pose, path: &[CellCoord]) -> Result<Vec<Command>> {
    let mut working = pose;
    let mut tokens = Vec::with_capacity(path.len() * 2);

    for &next in path {
        let from = working.position;
        if from.squared_distance(&next) == 2 {
            let movement = classify(grid, from, next, true)?;
            let corner = movement
                .intermediate
                .ok_or(MazeError::UndecomposableDiagonal { from, to: next })?;
            cardinal_hop(&mut working, corner, &mut tokens)?;
            cardinal_hop(&mut working, next, &mut tokens)?;
        } else {
            cardinal_hop(&mut working, next, &mut tokens)?;
        }
    }

    Ok(tokens)
}

/// Append the turns and advance for one cardinal hop.
fn cardinal_hop(pose: &mut Pose, to: CellCoord, tokens: &mut Vec<Command>) -> Result<()> {
    let delta = to - pose.position;
    let direction = Direction::from_delta(delta.x, delta.y)?;
    let rotation = pose.heading.minimal_rotation(direction);

    if !rotation.is_cardinal() {
        return Err(MazeError::NonCardinalHeading(pose.heading));
    }

    let turn = Command::turn(rotation.side);
    for _ in 0..rotation.half_steps / 2 {
        tokens.push(turn);
    }
    tokens.push(Command::Forward);

    *pose = pose.rotated(rotation).advanced();
    Ok(())
}
