#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::DVec2;

use crate::kernel::gaussian_gradient;
use crate::particle::ParticleSystem;

/// Clipped linear equation of state.
///
/// Returns `k * max(rho / rho0 - 1, 0)`. Never negative, so compressed
/// regions push apart but rarefied regions do not pull together.
#[inline]
pub fn equation_of_state(density: f64, rest_density: f64, k: f64) -> f64 {
    k * (density / rest_density - 1.0).max(0.0)
}

/// Per-particle pressure from the given densities and the system's rest
/// densities.
pub fn eval_pressure(particles: &ParticleSystem, densities: &[f64]) -> Vec<f64> {
    let k = particles.stiffness();
    densities
        .iter()
        .zip(particles.rest_densities())
        .map(|(&rho, &rho0)| equation_of_state(rho, rho0, k))
        .collect()
}

/// Per-particle pressure gradient.
///
/// `grad_i = sum_j rho_i * m_j * (p_i / rho_i^2 + p_i / rho_i^2) * gradW(x_i - x_j, h)`
///
/// Both addends of the symmetrisation bracket use particle `i`'s own
/// pressure and density, so the bracket is constant across the sum over
/// `j`. The sum covers every particle including `i` itself, whose gradient
/// term is zero.
pub fn eval_pressure_grad(particles: &ParticleSystem, densities: &[f64]) -> Vec<DVec2> {
    let pressures = eval_pressure(particles, densities);
    let positions = particles.positions();
    let masses = particles.masses();
    let h = particles.smoothing_length();

    let grad_at = |i: usize| -> DVec2 {
        let pos_i = positions[i];
        let rho_i = densities[i];
        let p_i = pressures[i];
        let fraction = p_i / (rho_i * rho_i) + p_i / (rho_i * rho_i);

        positions
            .iter()
            .zip(masses)
            .fold(DVec2::ZERO, |acc, (&pos_j, &m_j)| {
                acc + rho_i * m_j * fraction * gaussian_gradient(pos_i - pos_j, h)
            })
    };

    #[cfg(feature = "parallel")]
    {
        (0..positions.len()).into_par_iter().map(grad_at).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..positions.len()).map(grad_at).collect()
    }
}
