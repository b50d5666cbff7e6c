//! SimulationState - the container that owns every entity collection

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Position, PreyId, Tick};
use crate::entity::{ActorRef, Hunter, Police, Prey, Pursuer};
use crate::spatial::occupancy::is_occupied;

/// Snapshot of a pursuit run between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub prey: Vec<Prey>,
    pub hunters: Vec<Hunter>,
    pub police: Vec<Police>,
    pub finished: bool,
    /// Completed ticks
    pub count: Tick,
    /// Next prey id to hand out
    next_prey_id: u64,
}

impl SimulationState {
    pub fn empty() -> Self {
        Self {
            prey: Vec::new(),
            hunters: Vec::new(),
            police: Vec::new(),
            finished: false,
            count: 0,
            next_prey_id: 0,
        }
    }

    /// Build a state from existing collections, e.g. a hand-made scenario
    pub fn from_parts(prey: Vec<Prey>, hunters: Vec<Hunter>, police: Vec<Police>) -> Self {
        let next_prey_id = prey.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);
        Self {
            prey,
            hunters,
            police,
            finished: false,
            count: 0,
            next_prey_id,
        }
    }

    pub fn allocate_prey_id(&mut self) -> PreyId {
        let id = PreyId(self.next_prey_id);
        self.next_prey_id += 1;
        id
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        is_occupied(pos, &self.prey, &self.hunters, &self.police)
    }

    pub fn actor(&self, actor: ActorRef) -> &dyn Pursuer {
        match actor {
            ActorRef::Hunter(idx) => &self.hunters[idx],
            ActorRef::Police(idx) => &self.police[idx],
        }
    }

    pub fn actor_mut(&mut self, actor: ActorRef) -> &mut dyn Pursuer {
        match actor {
            ActorRef::Hunter(idx) => &mut self.hunters[idx],
            ActorRef::Police(idx) => &mut self.police[idx],
        }
    }

    /// Actors in turn order: every hunter, then every police officer
    pub fn turn_order(&self) -> impl Iterator<Item = ActorRef> {
        let hunters = (0..self.hunters.len()).map(ActorRef::Hunter);
        let police = (0..self.police.len()).map(ActorRef::Police);
        hunters.chain(police)
    }

    /// Every occupied cell, all factions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.prey
            .iter()
            .map(|p| p.position)
            .chain(self.hunters.iter().map(|h| h.position))
            .chain(self.police.iter().map(|p| p.position))
    }

    pub fn total_catches(&self) -> u32 {
        self.hunters.iter().map(|h| h.catches).sum::<u32>()
            + self.police.iter().map(|p| p.catches).sum::<u32>()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Copy a state so a renderer can keep it while the original keeps ticking.
///
/// Every entity record and collection is freshly allocated.
pub fn copy_simulation_state(state: &SimulationState) -> SimulationState {
    state.clone()
}
