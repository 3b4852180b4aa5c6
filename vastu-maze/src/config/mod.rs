//! Maze configuration loading.
//!
//! ## Example TOML
//!
//! ```toml
//! cols = 16
//! rows = 16
//! goals = [{ x = 7, y = 7 }, { x = 7, y = 8 }, { x = 8, y = 7 }, { x = 8, y = 8 }]
//! start = { x = 0, y = 0 }
//! heading = "n"
//! ```
//!
//! Every field is optional; omitted ones fall back to the 16x16 reference
//! maze. Labels and coordinates are checked by [`MazeSection::validate`]
//! so bad input is rejected before any search runs.

mod defaults;
mod error;
mod maze;

pub use error::ConfigLoadError;
pub use maze::MazeSection;
