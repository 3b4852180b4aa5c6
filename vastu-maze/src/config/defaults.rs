//! Default value functions for serde deserialization.

use crate::core::CellCoord;

pub fn maze_size() -> usize {
    16
}

/// The four centre cells of the reference 16x16 maze
pub fn goals() -> Vec<CellCoord> {
    vec![
        CellCoord::new(7, 7),
        CellCoord::new(7, 8),
        CellCoord::new(8, 7),
        CellCoord::new(8, 8),
    ]
}

pub fn start() -> CellCoord {
    CellCoord::new(0, 0)
}

pub fn heading() -> String {
    "n".to_string()
}

pub fn enabled() -> bool {
    true
}
