pub mod movement;
pub mod perception;
pub mod population;
pub mod runner;
pub mod state;
pub mod tick;

pub use movement::{take_a_step, StepOutcome};
pub use perception::nearest_visible;
pub use population::{catch_prey, generate_first_generation, random_unoccupied_position, spawn_prey};
pub use runner::Simulation;
pub use state::{copy_simulation_state, SimulationState};
pub use tick::{run_simulation_tick, simulation_tick, FinishReason, SimulationEvent};
