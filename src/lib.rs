extern crate nalgebra_glm as glm;

mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod particle;
pub mod simulation;
pub mod surface;
mod timer;
mod utils;

use wasm_bindgen::prelude::*;

pub use app::{launch, start, start_with, ParticleDemo};
pub use canvas::Canvas;
pub use color::{Color, PALETTE};
pub use config::{ElementIds, SimulationConfig};
pub use particle::Particle;
pub use simulation::{Population, Simulation};
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Install the panic hook and the console logger. Call once before [`start`].
#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}
