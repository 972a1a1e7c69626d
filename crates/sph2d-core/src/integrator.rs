//! Explicit Euler force integration.
//!
//! Each function returns a fresh array; the caller commits the results into
//! the [`ParticleSystem`](crate::particle::ParticleSystem) once the whole
//! step has been computed.

use glam::DVec2;

/// Add `dt * g` to fluid velocities `[0, fluid_count)`. Boundary velocities
/// are copied unchanged.
pub fn apply_gravity(velocities: &[DVec2], fluid_count: usize, g: DVec2, dt: f64) -> Vec<DVec2> {
    let mut new_velocities = velocities.to_vec();
    for vel in &mut new_velocities[..fluid_count] {
        *vel += dt * g;
    }
    new_velocities
}

/// Apply the pressure force `-grad_i / rho_i` to every particle.
///
/// Boundary particles are included: their velocities pick up the pressure
/// response too, even though [`update_positions`] never moves them.
pub fn apply_pressure_force(
    velocities: &[DVec2],
    densities: &[f64],
    pressure_grads: &[DVec2],
    dt: f64,
    masses: &[f64],
) -> Vec<DVec2> {
    velocities
        .iter()
        .zip(densities)
        .zip(pressure_grads)
        .zip(masses)
        .map(|(((&vel, &rho), &grad), &mass)| {
            let force = -1.0 / rho * grad;
            vel + dt * force / mass
        })
        .collect()
}

/// Advance fluid positions `[0, fluid_count)` by `dt * v`. Boundary
/// positions are copied bit-for-bit.
pub fn update_positions(
    positions: &[DVec2],
    velocities: &[DVec2],
    fluid_count: usize,
    dt: f64,
) -> Vec<DVec2> {
    let mut new_positions = positions.to_vec();
    for (pos, &vel) in new_positions[..fluid_count]
        .iter_mut()
        .zip(&velocities[..fluid_count])
    {
        *pos += dt * vel;
    }
    new_positions
}
