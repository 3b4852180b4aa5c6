//! Maze exploration.
//!
//! Frontier-based mapping: the mouse keeps a set of cells it knows it can
//! enter but has not sensed, always drives to the closest one, and senses
//! walls on arrival until nothing is left to visit.

mod frontier;

pub use frontier::{travel_distances, ExplorationReport, FrontierExplorer};
