//! Simulation configuration with documented constants
//!
//! Everything here is fixed before the first generation is built; the tick
//! function never negotiates any of it at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::Tick;
use crate::spatial::grid::Grid;

/// Configuration for a pursuit run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === GRID ===
    /// Number of rows (x axis upper bound, exclusive)
    pub rows: i32,

    /// Number of columns (y axis upper bound, exclusive)
    pub cols: i32,

    // === POPULATION ===
    /// Prey alive at any time; every catch respawns one
    pub prey_count: usize,

    pub hunter_count: usize,

    pub police_count: usize,

    // === SIGHT ===
    /// How far a hunter can see prey (inclusive, grid units)
    pub hunter_sight: u32,

    /// How far police can see prey (inclusive, grid units)
    pub police_sight: u32,

    /// Radius of the immediate catch check
    ///
    /// At 1 only the four orthogonal neighbours qualify; diagonals sit at
    /// distance² = 2 and are out of reach.
    pub catch_radius: u32,

    // === LIFECYCLE ===
    /// The run finishes once this many ticks have completed
    pub tick_cap: Tick,

    pub hunter_health: u32,

    pub prey_health: u32,

    /// Seed for the deterministic RNG owned by the driver
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,

            prey_count: 40,
            hunter_count: 10,
            police_count: 0,

            hunter_sight: 2,
            police_sight: 3,
            catch_radius: 1,

            tick_cap: 30,
            hunter_health: 100,
            prey_health: 100,

            seed: 12345,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.rows, self.cols)
    }

    /// Total number of entities placed at generation
    pub fn entity_count(&self) -> usize {
        self.prey_count + self.hunter_count + self.police_count
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        // Spawns sample [0, rows-1) x [0, cols-1), which is empty below 2
        if self.rows < 2 || self.cols < 2 {
            return Err(SimError::InvalidConfig(format!(
                "grid must be at least 2x2, got {}x{}",
                self.rows, self.cols
            )));
        }

        let capacity = self.grid().spawn_capacity();
        if self.entity_count() > capacity {
            return Err(SimError::InvalidConfig(format!(
                "{} entities do not fit in {} spawnable cells",
                self.entity_count(),
                capacity
            )));
        }

        Ok(())
    }
}
