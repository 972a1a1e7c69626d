//! Initial arrangements: a lattice of fluid inside a rectangular wall ring.

use glam::DVec2;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::particle::ParticleSystem;

/// `n` evenly spaced samples from `start` to `end`, both inclusive.
///
/// The final sample is exactly `end`. `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Square lattice of `grid_dim * grid_dim` particles spanning `[min, max]`.
///
/// Row-major with y as the outer axis: index `row * grid_dim + col` sits at
/// `(xs[col], ys[row])`.
pub fn fluid_block(grid_dim: usize, min: DVec2, max: DVec2) -> Vec<DVec2> {
    let xs = linspace(min.x, max.x, grid_dim);
    let ys = linspace(min.y, max.y, grid_dim);
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| DVec2::new(x, y)))
        .collect()
}

/// Rectangular ring of `4 * per_wall` particles around `[min, max]`.
///
/// Walls run counter-clockwise starting at the bottom-left corner: bottom,
/// right, top, left. Each wall omits its end corner, which is the start of
/// the next wall.
pub fn boundary_ring(min: DVec2, max: DVec2, per_wall: usize) -> Vec<DVec2> {
    // Drop the last sample of each wall.
    let wall = |from: f64, to: f64| {
        let mut samples = linspace(from, to, per_wall + 1);
        samples.pop();
        samples
    };

    let mut ring = Vec::with_capacity(4 * per_wall);
    ring.extend(wall(min.x, max.x).into_iter().map(|x| DVec2::new(x, min.y)));
    ring.extend(wall(min.y, max.y).into_iter().map(|y| DVec2::new(max.x, y)));
    ring.extend(wall(max.x, min.x).into_iter().map(|x| DVec2::new(x, max.y)));
    ring.extend(wall(max.y, min.y).into_iter().map(|y| DVec2::new(min.x, y)));
    ring
}

/// Assemble the particle system described by `config`: fluid lattice first,
/// then the boundary ring, all at rest with uniform mass.
pub fn build_tank(config: &SimulationConfig) -> Result<ParticleSystem> {
    config.validate()?;

    let mut positions = fluid_block(config.grid_dim, config.fluid_min, config.fluid_max);
    let fluid_count = positions.len();
    positions.extend(boundary_ring(
        config.domain_min,
        config.domain_max,
        config.wall_particles,
    ));

    let count = positions.len();
    ParticleSystem::new(
        vec![config.particle_mass; count],
        positions,
        vec![DVec2::ZERO; count],
        config.smoothing_length,
        config.stiffness,
        fluid_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let v = linspace(-0.2, 0.2, 20);
        assert_eq!(v.len(), 20);
        assert_eq!(v[0], -0.2);
        assert_eq!(v[19], 0.2);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }
}
