//! Tunables for the simulation and the page it is mounted on.

use crate::color::{Color, PALETTE};

/// Simulation constants. `Default` reproduces the stock demo.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Share of the display width given to the surface.
    pub width_fraction: f64,
    /// Share of the display height given to the surface.
    pub height_fraction: f64,
    /// Swarm size used by the swarm trigger and on resize.
    pub swarm_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Velocity components are sampled from `[-max_speed, max_speed]`.
    pub max_speed: f64,
    pub single_radius: f64,
    pub single_velocity: (f64, f64),
    pub single_color: Color,
}

impl SimulationConfig {
    pub const DEFAULT_SWARM_COUNT: usize = 100;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width_fraction: 0.9,
            height_fraction: 0.65,
            swarm_count: Self::DEFAULT_SWARM_COUNT,
            min_radius: 5.0,
            max_radius: 15.0,
            max_speed: 3.0,
            single_radius: 20.0,
            single_velocity: (3.0, 2.5),
            single_color: PALETTE[0],
        }
    }
}

/// Ids of the DOM elements the demo binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub canvas: String,
    pub single_button: String,
    pub swarm_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            canvas: "particleCanvas".to_string(),
            single_button: "oneParticleBtn".to_string(),
            swarm_button: "manyParticlesBtn".to_string(),
        }
    }
}
