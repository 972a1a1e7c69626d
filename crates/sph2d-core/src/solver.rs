use glam::DVec2;
use log::{debug, info, trace};

use crate::config::SimulationConfig;
use crate::density::reconstruct_density;
use crate::error::Result;
use crate::integrator::{apply_gravity, apply_pressure_force, update_positions};
use crate::particle::ParticleSystem;
use crate::pressure::eval_pressure_grad;
use crate::scene::build_tank;
use crate::snapshot::Frame;

/// Advance `particles` by one timestep.
///
/// Order is fixed: density, pressure gradient, gravity, pressure force,
/// position update. Densities and gradients are taken from the state at the
/// start of the step; the new velocities and positions are committed
/// together at the end.
pub fn step(particles: &mut ParticleSystem, g: DVec2, dt: f64) {
    let fluid_count = particles.fluid_count();

    let densities = reconstruct_density(particles);
    let pressure_grads = eval_pressure_grad(particles, &densities);

    let velocities = apply_gravity(particles.velocities(), fluid_count, g, dt);
    let velocities = apply_pressure_force(
        &velocities,
        &densities,
        &pressure_grads,
        dt,
        particles.masses(),
    );
    let positions = update_positions(particles.positions(), &velocities, fluid_count, dt);

    particles.commit(positions, velocities);
}

/// Run `frame_count` steps and capture the positions after each one.
pub fn run(particles: &mut ParticleSystem, g: DVec2, dt: f64, frame_count: usize) -> Vec<Frame> {
    debug!(
        "running {} steps of {} particles, dt = {}",
        frame_count,
        particles.len(),
        dt
    );

    let mut frames = Vec::with_capacity(frame_count);
    for index in 0..frame_count {
        step(particles, g, dt);
        frames.push(Frame::new(
            particles.positions().to_vec(),
            particles.fluid_count(),
        ));
        trace!("step {} done", index);
    }

    info!("simulated {} frames", frames.len());
    frames
}

/// A particle system bundled with the parameters that drive it.
pub struct Simulation {
    pub particles: ParticleSystem,
    pub config: SimulationConfig,
}

impl Simulation {
    /// Build the tank described by `config`.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        let particles = build_tank(&config)?;
        Ok(Self { particles, config })
    }

    /// Advance one timestep with the configured gravity and `dt`.
    pub fn step(&mut self) {
        step(&mut self.particles, self.config.gravity, self.config.dt);
    }

    /// Simulate `config.frame_count` steps from the current state.
    pub fn run(&mut self) -> Vec<Frame> {
        run(
            &mut self.particles,
            self.config.gravity,
            self.config.dt,
            self.config.frame_count,
        )
    }
}
