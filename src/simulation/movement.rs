//! Movement system - one actor's turn
//!
//! A turn is either a catch (prey within the catch radius, no movement) or a
//! single step. The first step attempt is greedy toward the nearest visible
//! prey; once an attempt is rejected the actor falls back to random steps.
//! The random domain contains the zero move, which is always accepted, so a
//! turn cannot stall.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::{Direction, Position, PreyId};
use crate::entity::{ActorRef, Located, Pursuer, Species};
use crate::simulation::perception::nearest_visible;
use crate::simulation::population::catch_prey;
use crate::simulation::state::SimulationState;
use crate::spatial::grid::Grid;

/// What an actor did with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Caught {
        prey: PreyId,
        species: Species,
        replacement: PreyId,
    },
    Moved {
        from: Position,
        to: Position,
    },
}

/// Uniform pick from the nine single-step directions
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction {
        dx: rng.gen_range(-1..=1),
        dy: rng.gen_range(-1..=1),
    }
}

/// Pick a legal destination for an actor standing at `origin`
pub fn choose_destination<R: Rng + ?Sized>(
    state: &SimulationState,
    grid: Grid,
    origin: Position,
    sight: u32,
    rng: &mut R,
) -> Position {
    let mut greedy = nearest_visible(origin, sight, &state.prey)
        .map(|target| Direction::toward(origin, target.position));

    loop {
        let dir = greedy.take().unwrap_or_else(|| random_direction(rng));
        let candidate = origin.offset(dir);

        // Staying put is always legal; the actor is the one occupying it
        if candidate == origin {
            return origin;
        }
        if grid.is_out_of_bounds(candidate) || state.is_occupied(candidate) {
            continue;
        }
        return candidate;
    }
}

/// Run one actor's turn against the live state
pub fn take_a_step<R: Rng + ?Sized>(
    state: &mut SimulationState,
    actor: ActorRef,
    config: &SimulationConfig,
    rng: &mut R,
) -> StepOutcome {
    let (origin, sight) = {
        let pursuer = state.actor(actor);
        (pursuer.position(), pursuer.sight())
    };

    if let Some(target) = nearest_visible(origin, config.catch_radius, &state.prey) {
        let (prey, species) = (target.id, target.species);
        let replacement = catch_prey(state, actor, prey, config, rng);
        return StepOutcome::Caught {
            prey,
            species,
            replacement,
        };
    }

    let to = choose_destination(state, config.grid(), origin, sight, rng);
    state.actor_mut(actor).move_to(to);

    if to != origin {
        tracing::trace!("{} moved ({}, {}) -> ({}, {})", actor, origin.x, origin.y, to.x, to.y);
    }

    StepOutcome::Moved { from: origin, to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::HunterId;
    use crate::entity::{Hunter, Police, Prey};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            rows: 5,
            cols: 5,
            prey_count: 1,
            hunter_count: 1,
            ..Default::default()
        }
    }

    fn prey_at(id: u64, x: i32, y: i32) -> Prey {
        Prey::new(PreyId(id), Position::new(x, y), Species::Psyduck, 100)
    }

    fn hunter_at(x: i32, y: i32) -> Hunter {
        Hunter::new(HunterId(0), Position::new(x, y), 100, 2)
    }

    #[test]
    fn test_orthogonal_prey_is_caught_without_moving() {
        let config = small_config();
        let mut state = SimulationState::from_parts(vec![prey_at(0, 1, 0)], vec![hunter_at(0, 0)], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = take_a_step(&mut state, ActorRef::Hunter(0), &config, &mut rng);

        match outcome {
            StepOutcome::Caught { prey, replacement, .. } => {
                assert_eq!(prey, PreyId(0));
                assert_eq!(replacement, PreyId(1));
            }
            other => panic!("expected catch, got {:?}", other),
        }
        assert_eq!(state.hunters[0].position, Position::new(0, 0));
        assert_eq!(state.hunters[0].catches, 1);
        assert_eq!(state.prey.len(), 1);
        assert_ne!(state.prey[0].position, state.hunters[0].position);
    }

    #[test]
    fn test_diagonal_prey_blocks_greedy_step() {
        // Prey at (1,1) is out of catch reach; the greedy step lands on it
        // and is rejected, so the hunter ends up on a free neighbour or stays.
        let config = small_config();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..50 {
            let mut state = SimulationState::from_parts(vec![prey_at(0, 1, 1)], vec![hunter_at(0, 0)], vec![]);
            let outcome = take_a_step(&mut state, ActorRef::Hunter(0), &config, &mut rng);

            let to = match outcome {
                StepOutcome::Moved { to, .. } => to,
                other => panic!("expected move, got {:?}", other),
            };
            assert!(
                [Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)].contains(&to),
                "unexpected destination {:?}",
                to
            );
            assert_eq!(state.hunters[0].catches, 0);
        }
    }

    #[test]
    fn test_greedy_step_toward_visible_prey() {
        let config = small_config();
        let mut state = SimulationState::from_parts(vec![prey_at(0, 2, 2)], vec![hunter_at(0, 0)], vec![]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // distance² = 8 > 4, out of sight at radius 2
        let dest = choose_destination(&state, config.grid(), Position::new(0, 0), 2, &mut rng);
        assert!(config.grid().contains(dest));

        state.prey[0].position = Position::new(2, 0);
        let outcome = take_a_step(&mut state, ActorRef::Hunter(0), &config, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                from: Position::new(0, 0),
                to: Position::new(1, 0)
            }
        );
    }

    #[test]
    fn test_boxed_in_actor_stays_put() {
        // Corner hunter with all three neighbours taken
        let config = small_config();
        let mut state = SimulationState::from_parts(
            vec![prey_at(0, 4, 4)],
            vec![hunter_at(0, 0)],
            vec![
                Police::new(Position::new(1, 0), 3),
                Police::new(Position::new(0, 1), 3),
                Police::new(Position::new(1, 1), 3),
            ],
        );
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let outcome = take_a_step(&mut state, ActorRef::Hunter(0), &config, &mut rng);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                from: Position::new(0, 0),
                to: Position::new(0, 0)
            }
        );
    }

    #[test]
    fn test_police_catch_counts_on_police() {
        let config = small_config();
        let mut state = SimulationState::from_parts(
            vec![prey_at(0, 3, 4)],
            vec![hunter_at(0, 0)],
            vec![Police::new(Position::new(3, 3), 3)],
        );
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let outcome = take_a_step(&mut state, ActorRef::Police(0), &config, &mut rng);
        assert!(matches!(outcome, StepOutcome::Caught { .. }));
        assert_eq!(state.police[0].catches, 1);
        assert_eq!(state.hunters[0].catches, 0);
    }

    #[test]
    fn test_random_direction_stays_in_domain() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..200 {
            assert!(Direction::ALL.contains(&random_direction(&mut rng)));
        }
    }
}
