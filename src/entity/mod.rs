//! Entities that live on the grid: prey, hunters and police

pub mod hunter;
pub mod police;
pub mod prey;
pub mod species;

pub use hunter::Hunter;
pub use police::Police;
pub use prey::Prey;
pub use species::Species;

use serde::{Deserialize, Serialize};

use crate::core::types::Position;

/// Anything that occupies a grid cell
pub trait Located {
    fn position(&self) -> Position;
}

/// An entity that takes a step every tick and can catch prey
pub trait Pursuer: Located {
    fn sight(&self) -> u32;
    fn move_to(&mut self, pos: Position);
    fn record_catch(&mut self);
}

/// Index of an acting entity within its faction's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorRef {
    Hunter(usize),
    Police(usize),
}

impl std::fmt::Display for ActorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorRef::Hunter(idx) => write!(f, "hunter#{}", idx),
            ActorRef::Police(idx) => write!(f, "police#{}", idx),
        }
    }
}
