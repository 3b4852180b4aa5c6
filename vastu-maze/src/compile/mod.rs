//! Path-to-command compilation.
//!
//! Two passes turn an A* path into actuator commands:
//!
//! 1. [`translate_path`]: each hop becomes 90° turns plus a full-cell
//!    advance (`F`, `L`, `R`). Diagonal hops are split at their corner cell.
//! 2. [`rewrite_diagonals`]: rectangular detours are replaced with 45° turns
//!    and half-cell advances (`L45`, `R45`, `FH`).
//!
//! [`KinematicPose`] executes either stream on a half-cell lattice, which is
//! how the executor tracks the mouse and how equivalence of the two passes
//! is checked.
//!
//! ```rust,ignore
//! let naive = translate_path(&grid, grid.pose(), &path.cells)?;
//! let plan = rewrite_diagonals(grid.pose(), &naive)?;
//! println!("{}", CommandSequence::from(plan.commands));
//! ```

mod commands;
mod gait;
mod kinematics;
mod naive;

pub use commands::{Command, CommandSequence};
pub use gait::{rewrite_diagonals, GaitPlan, MovementBlock};
pub use kinematics::KinematicPose;
pub use naive::translate_path;
