//! Particle population and the per-frame update that moves and draws it.

use crate::canvas::Canvas;
use crate::color::{Color, PALETTE};
use crate::config::SimulationConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

/// Which generator produced the current population.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Population {
    Empty,
    Single,
    Swarm,
}

pub struct Simulation {
    surface: Surface,
    particles: Vec<Particle>,
    population: Population,
    config: SimulationConfig,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Simulation {
            surface: Surface::new(config.width_fraction, config.height_fraction),
            particles: Vec::new(),
            population: Population::Empty,
            config,
        }
    }

    /// Replace the surface, keeping the population as is.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn population(&self) -> Population {
        self.population
    }

    /// Resize the surface for a new display area. Particles are left untouched.
    pub fn resize(&mut self, display_width: f64, display_height: f64) {
        self.surface.resize(display_width, display_height);
        log::debug!(
            "surface resized to {}x{}",
            self.surface.width(),
            self.surface.height()
        );
    }

    /// Resize, then rebuild the current population so it fits the new bounds.
    pub fn handle_display_resize(&mut self, display_width: f64, display_height: f64) {
        self.resize(display_width, display_height);
        match self.population {
            Population::Single => self.generate_single(),
            Population::Swarm | Population::Empty => {
                self.generate_swarm(self.config.swarm_count)
            }
        }
    }

    pub fn generate_single(&mut self) {
        let (x, y) = self.surface.center();
        let (vel_x, vel_y) = self.config.single_velocity;
        self.particles.clear();
        self.particles.push(Particle::new(
            x,
            y,
            vel_x,
            vel_y,
            self.config.single_radius,
            self.config.single_color,
        ));
        self.population = Population::Single;
        log::info!("spawned single particle at ({}, {})", x, y);
    }

    pub fn generate_swarm(&mut self, count: usize) {
        let mut rng = rand::thread_rng();
        self.generate_swarm_with(count, &mut rng);
    }

    pub fn generate_swarm_with<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(count);
        let max_speed = self.config.max_speed.max(0.0);
        for _ in 0..count {
            let radius = sample_or_min(rng, self.config.min_radius, self.config.max_radius);
            let pos_x = spawn_coordinate(rng, radius, self.surface.width());
            let pos_y = spawn_coordinate(rng, radius, self.surface.height());
            let vel_x = nonzero_or(sample_or_min(rng, -max_speed, max_speed), 1.0);
            let vel_y = nonzero_or(sample_or_min(rng, -max_speed, max_speed), -1.0);
            let color = random_color(rng);
            self.particles
                .push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color));
        }
        self.population = if count > 0 {
            Population::Swarm
        } else {
            Population::Empty
        };
        log::info!("spawned swarm of {} particles", count);
    }

    /// Clear the canvas, then move and draw every particle in order.
    pub fn step<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.clear(self.surface.width(), self.surface.height())?;
        for particle in &mut self.particles {
            particle.advance(&self.surface);
            canvas.fill_circle(particle.pos, particle.radius(), particle.color)?;
        }
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

// Uniform in [radius, extent - radius], or the axis center when the particle doesn't fit
fn spawn_coordinate<R: Rng>(rng: &mut R, radius: f64, extent: f64) -> f64 {
    let (min, max) = (radius, extent - radius);
    if min < max {
        rng.gen_range(min, max)
    } else {
        extent / 2.0
    }
}

// Uniform in [min, max), or `min` when the interval is empty
fn sample_or_min<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min < max {
        rng.gen_range(min, max)
    } else {
        min
    }
}

fn nonzero_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 {
        fallback
    } else {
        value
    }
}

fn random_color<R: Rng>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0, PALETTE.len())]
}
