//! Pokehunt - turn-based pursuit simulation on a fixed grid

pub mod core;
pub mod entity;
pub mod simulation;
pub mod spatial;
