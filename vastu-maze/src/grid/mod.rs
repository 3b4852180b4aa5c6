//! Maze grid: cell storage, walls, mouse pose and goals.
//!
//! [`MazeGrid`] is the single owner of all cells. Walls are recorded with
//! [`MazeGrid::add_wall`], which keeps shared walls consistent on both
//! sides. The per-cell A* scratch fields are cleared by
//! [`MazeGrid::reset_search_state`] at the start of every search.

mod render;
mod storage;

pub use storage::MazeGrid;
