use serde::{Deserialize, Serialize};

use crate::core::types::Position;
use crate::entity::{Located, Pursuer};

/// Police officer. Runs the same step as a hunter and has no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Police {
    pub position: Position,
    pub sight: u32,
    pub catches: u32,
}

impl Police {
    pub fn new(position: Position, sight: u32) -> Self {
        Self {
            position,
            sight,
            catches: 0,
        }
    }
}

impl Located for Police {
    fn position(&self) -> Position {
        self.position
    }
}

impl Pursuer for Police {
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
