use serde::{Deserialize, Serialize};

use crate::core::types::{Position, PreyId};
use crate::entity::species::Species;
use crate::entity::Located;

/// A prey entity (pokemon)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prey {
    pub id: PreyId,
    pub position: Position,
    pub species: Species,
    /// Carried for display, never read by the core
    pub health: u32,
}

impl Prey {
    pub fn new(id: PreyId, position: Position, species: Species, health: u32) -> Self {
        Self {
            id,
            position,
            species,
            health,
        }
    }

    pub fn sprite_url(&self) -> String {
        self.species.sprite_url()
    }
}

impl Located for Prey {
    fn position(&self) -> Position {
        self.position
    }
}
