//! Population system - initial placement, catches and respawns
//!
//! Prey numbers never change during a run: every catch removes one prey and
//! spawns a replacement of random species at a free cell.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{HunterId, Position, PreyId};
use crate::entity::{ActorRef, Hunter, Police, Prey, Pursuer, Species};
use crate::simulation::state::SimulationState;
use crate::spatial::grid::Grid;

/// Sample spawn cells until one is free.
///
/// Terminates as long as the spawn area has a free cell, which
/// `SimulationConfig::validate` guarantees for validated configs.
pub fn random_unoccupied_position<R: Rng + ?Sized>(
    grid: Grid,
    state: &SimulationState,
    rng: &mut R,
) -> Position {
    loop {
        let pos = grid.sample_spawn_cell(rng);
        if !state.is_occupied(pos) {
            return pos;
        }
    }
}

/// Build a fresh prey with a new id, random species and a free cell.
///
/// The prey is not inserted; the caller decides when it joins the state.
pub fn spawn_prey<R: Rng + ?Sized>(
    state: &mut SimulationState,
    config: &SimulationConfig,
    rng: &mut R,
) -> Prey {
    let species = Species::random(rng);
    let position = random_unoccupied_position(config.grid(), state, rng);
    let id = state.allocate_prey_id();
    Prey::new(id, position, species, config.prey_health)
}

/// Build the starting populations: prey first, then hunters, then police
pub fn generate_first_generation<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationState> {
    config.validate()?;

    let grid = config.grid();
    let mut state = SimulationState::empty();

    for _ in 0..config.prey_count {
        let prey = spawn_prey(&mut state, config, rng);
        state.prey.push(prey);
    }

    for idx in 0..config.hunter_count {
        let position = random_unoccupied_position(grid, &state, rng);
        state.hunters.push(Hunter::new(
            HunterId(idx as u32),
            position,
            config.hunter_health,
            config.hunter_sight,
        ));
    }

    for _ in 0..config.police_count {
        let position = random_unoccupied_position(grid, &state, rng);
        state.police.push(Police::new(position, config.police_sight));
    }

    tracing::info!(
        "Generated {} prey, {} hunters, {} police on a {}x{} grid",
        state.prey.len(),
        state.hunters.len(),
        state.police.len(),
        grid.rows,
        grid.cols
    );

    Ok(state)
}

/// Record a catch for `actor`, remove the prey and push its replacement.
///
/// Returns the replacement's id.
pub fn catch_prey<R: Rng + ?Sized>(
    state: &mut SimulationState,
    actor: ActorRef,
    prey_id: PreyId,
    config: &SimulationConfig,
    rng: &mut R,
) -> PreyId {
    state.actor_mut(actor).record_catch();
    state.prey.retain(|p| p.id != prey_id);

    let replacement = spawn_prey(state, config, rng);
    let replacement_id = replacement.id;

    tracing::debug!(
        "{} caught {}; {} ({}) spawned at ({}, {})",
        actor,
        prey_id,
        replacement_id,
        replacement.species.name(),
        replacement.position.x,
        replacement.position.y
    );

    state.prey.push(replacement);
    replacement_id
}
