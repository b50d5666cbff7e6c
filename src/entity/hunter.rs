use serde::{Deserialize, Serialize};

use crate::core::types::{HunterId, Position};
use crate::entity::{Located, Pursuer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    pub id: HunterId,
    pub position: Position,
    pub health: u32,
    /// Prey caught so far; only ever incremented
    pub catches: u32,
    pub sight: u32,
}

impl Hunter {
    pub fn new(id: HunterId, position: Position, health: u32, sight: u32) -> Self {
        Self {
            id,
            position,
            health,
            catches: 0,
            sight,
        }
    }
}

impl Located for Hunter {
    fn position(&self) -> Position {
        self.position
    }
}

impl Pursuer for Hunter {
    fn sight(&self) -> u32 {
        self.sight
    }

    fn move_to(&mut self, pos: Position) {
        self.position = pos;
    }

    fn record_catch(&mut self) {
        self.catches += 1;
    }
}
