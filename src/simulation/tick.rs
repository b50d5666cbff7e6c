//! Tick system - advances the pursuit by one step
//!
//! Every hunter acts once in list order, then every police officer. Actors
//! see the effects of everyone who acted before them in the same tick,
//! including catches and respawns.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{Position, PreyId, Tick};
use crate::entity::{ActorRef, Species};
use crate::simulation::movement::{take_a_step, StepOutcome};
use crate::simulation::state::SimulationState;

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    TickCap,
    PreyExhausted,
}

/// Events generated during a tick, for display in a renderer's log
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    PreyCaught {
        tick: Tick,
        catcher: ActorRef,
        prey: PreyId,
        species: Species,
        replacement: PreyId,
    },
    /// Only emitted when the actor actually changed cell
    ActorMoved {
        tick: Tick,
        actor: ActorRef,
        from: Position,
        to: Position,
    },
    Finished {
        tick: Tick,
        reason: FinishReason,
    },
}

/// Termination check evaluated at the start of every tick
pub fn finish_reason(state: &SimulationState, config: &SimulationConfig) -> Option<FinishReason> {
    if state.count >= config.tick_cap {
        Some(FinishReason::TickCap)
    } else if state.prey.is_empty() {
        Some(FinishReason::PreyExhausted)
    } else {
        None
    }
}

/// Run a single tick in place and report what happened.
///
/// A finished state is left untouched.
pub fn run_simulation_tick<R: Rng + ?Sized>(
    state: &mut SimulationState,
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<SimulationEvent> {
    if state.finished {
        return Vec::new();
    }

    if let Some(reason) = finish_reason(state, config) {
        state.finished = true;
        tracing::info!("Simulation finished at tick {} ({:?})", state.count, reason);
        return vec![SimulationEvent::Finished {
            tick: state.count,
            reason,
        }];
    }

    let tick = state.count;
    let actors: Vec<ActorRef> = state.turn_order().collect();
    let mut events = Vec::new();

    for actor in actors {
        match take_a_step(state, actor, config, rng) {
            StepOutcome::Caught {
                prey,
                species,
                replacement,
            } => events.push(SimulationEvent::PreyCaught {
                tick,
                catcher: actor,
                prey,
                species,
                replacement,
            }),
            StepOutcome::Moved { from, to } if from != to => {
                events.push(SimulationEvent::ActorMoved {
                    tick,
                    actor,
                    from,
                    to,
                });
            }
            StepOutcome::Moved { .. } => {}
        }
    }

    state.count += 1;
    events
}

/// Value-in, value-out form of [`run_simulation_tick`]
pub fn simulation_tick<R: Rng + ?Sized>(
    mut state: SimulationState,
    config: &SimulationConfig,
    rng: &mut R,
) -> SimulationState {
    run_simulation_tick(&mut state, config, rng);
    state
}
