#[cfg(feature = "parallel")]
use rayon::prelude::*;

use glam::DVec2;

use crate::kernel::gaussian_kernel;
use crate::particle::ParticleSystem;

/// Reconstruct the SPH density of every particle.
///
/// `rho_i = sum_j m_j * W(x_i - x_j, h)` over all particles, fluid and
/// boundary alike, including the self term `j = i`.
pub fn reconstruct_density(particles: &ParticleSystem) -> Vec<f64> {
    density_field(
        particles.positions(),
        particles.masses(),
        particles.smoothing_length(),
    )
}

/// Dense O(N^2) density sum over raw arrays.
///
/// Used directly by [`ParticleSystem::new`] to capture rest densities
/// before the system exists.
pub(crate) fn density_field(positions: &[DVec2], masses: &[f64], h: f64) -> Vec<f64> {
    let density_at = |i: usize| -> f64 {
        let pos_i = positions[i];
        positions
            .iter()
            .zip(masses)
            .map(|(&pos_j, &m_j)| m_j * gaussian_kernel(pos_i - pos_j, h))
            .sum()
    };

    #[cfg(feature = "parallel")]
    {
        (0..positions.len()).into_par_iter().map(density_at).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..positions.len()).map(density_at).collect()
    }
}
