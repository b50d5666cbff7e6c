//! Simulation driver - owns config, seeded RNG and live state

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::HunterId;
use crate::simulation::population::generate_first_generation;
use crate::simulation::state::{copy_simulation_state, SimulationState};
use crate::simulation::tick::{run_simulation_tick, SimulationEvent};

/// A complete pursuit run. The seed in the config fully determines it.
pub struct Simulation {
    config: SimulationConfig,
    rng: ChaCha8Rng,
    state: SimulationState,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = generate_first_generation(&config, &mut rng)?;
        Ok(Self { config, rng, state })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Detached copy of the current state
    pub fn snapshot(&self) -> SimulationState {
        copy_simulation_state(&self.state)
    }

    pub fn step(&mut self) -> Vec<SimulationEvent> {
        run_simulation_tick(&mut self.state, &self.config, &mut self.rng)
    }

    /// Tick until finished, returning every event in order
    pub fn run_to_completion(&mut self) -> Vec<SimulationEvent> {
        let mut history = Vec::new();
        while !self.state.finished {
            history.extend(self.step());
        }
        history
    }

    /// Hunters by catches, highest first; equal counts keep list order
    pub fn leaderboard(&self) -> Vec<(HunterId, u32)> {
        let mut board: Vec<(HunterId, u32)> =
            self.state.hunters.iter().map(|h| (h.id, h.catches)).collect();
        board.sort_by(|a, b| b.1.cmp(&a.1));
        board
    }
}
