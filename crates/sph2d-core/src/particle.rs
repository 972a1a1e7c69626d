use glam::DVec2;
use log::debug;

use crate::density::density_field;
use crate::error::{Result, SphError};

/// SoA particle storage.
///
/// Indices `[0, fluid_count)` are fluid particles and move under the
/// integrator; `[fluid_count, len)` are boundary particles whose positions
/// never change after construction.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    positions: Vec<DVec2>,
    velocities: Vec<DVec2>,
    masses: Vec<f64>,
    /// Smoothing length shared by every particle
    h: f64,
    /// Equation-of-state stiffness
    k: f64,
    fluid_count: usize,
    /// Density of the initial arrangement, captured once in `new`
    rest_densities: Vec<f64>,
}

impl ParticleSystem {
    /// Build a particle system and snapshot its rest densities.
    ///
    /// Fails if `masses` or `velocities` disagree in length with `positions`,
    /// or if `fluid_count` is larger than the particle count.
    pub fn new(
        masses: Vec<f64>,
        positions: Vec<DVec2>,
        velocities: Vec<DVec2>,
        h: f64,
        k: f64,
        fluid_count: usize,
    ) -> Result<Self> {
        let count = positions.len();
        check_len("velocities", count, velocities.len())?;
        check_len("masses", count, masses.len())?;
        if fluid_count > count {
            return Err(SphError::FluidCountExceedsTotal {
                fluid_count,
                total: count,
            });
        }

        let rest_densities = density_field(&positions, &masses, h);
        debug!(
            "particle system: {} particles ({} fluid), h = {}, k = {}",
            count, fluid_count, h, k
        );

        Ok(Self {
            positions,
            velocities,
            masses,
            h,
            k,
            fluid_count,
            rest_densities,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn fluid_count(&self) -> usize {
        self.fluid_count
    }

    pub fn boundary_count(&self) -> usize {
        self.len() - self.fluid_count
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn smoothing_length(&self) -> f64 {
        self.h
    }

    pub fn stiffness(&self) -> f64 {
        self.k
    }

    pub fn rest_densities(&self) -> &[f64] {
        &self.rest_densities
    }

    /// Overwrite the kinematic state with the result of one timestep.
    ///
    /// Boundary entries of `positions` are expected to be untouched copies;
    /// the integrator guarantees that.
    pub(crate) fn commit(&mut self, positions: Vec<DVec2>, velocities: Vec<DVec2>) {
        debug_assert_eq!(positions.len(), self.positions.len());
        debug_assert_eq!(velocities.len(), self.velocities.len());
        self.positions = positions;
        self.velocities = velocities;
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SphError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
