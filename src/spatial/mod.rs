pub mod grid;
pub mod occupancy;

pub use grid::{is_within_sight, Grid};
pub use occupancy::is_occupied;
