use glam::DVec2;

use crate::error::{Result, SphError};

/// Parameters for a dam-style tank: a square block of fluid suspended inside
/// a rectangular ring of boundary particles.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Fluid block resolution; the block holds `grid_dim * grid_dim` particles.
    pub grid_dim: usize,
    pub fluid_min: DVec2,
    pub fluid_max: DVec2,
    /// Corners of the boundary ring.
    pub domain_min: DVec2,
    pub domain_max: DVec2,
    /// Boundary particles per wall (four walls).
    pub wall_particles: usize,
    pub particle_mass: f64,
    pub smoothing_length: f64,
    pub stiffness: f64,
    pub gravity: DVec2,
    pub dt: f64,
    pub frame_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_dim: 20,
            fluid_min: DVec2::new(-0.2, 0.2),
            fluid_max: DVec2::new(0.2, 0.4),
            domain_min: DVec2::new(-0.5, 0.0),
            domain_max: DVec2::new(0.5, 1.0),
            wall_particles: 50,
            particle_mass: 0.1,
            smoothing_length: 0.02,
            stiffness: 2.3,
            gravity: DVec2::new(0.0, -1.0),
            dt: 0.02,
            frame_count: 500,
        }
    }
}

impl SimulationConfig {
    pub fn fluid_count(&self) -> usize {
        self.grid_dim * self.grid_dim
    }

    pub fn boundary_count(&self) -> usize {
        4 * self.wall_particles
    }

    /// Reject parameters that cannot produce a meaningful tank.
    pub fn validate(&self) -> Result<()> {
        if self.grid_dim == 0 {
            return invalid("grid_dim", 0.0);
        }
        positive("particle_mass", self.particle_mass)?;
        positive("smoothing_length", self.smoothing_length)?;
        positive("dt", self.dt)?;
        if !self.stiffness.is_finite() || self.stiffness < 0.0 {
            return invalid("stiffness", self.stiffness);
        }
        if !self.gravity.is_finite() {
            return invalid("gravity", f64::NAN);
        }
        ordered("fluid", self.fluid_min, self.fluid_max)?;
        ordered("domain", self.domain_min, self.domain_max)?;
        Ok(())
    }
}

fn invalid(name: &'static str, value: f64) -> Result<()> {
    Err(SphError::InvalidParameter { name, value })
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(name, value)
    }
}

fn ordered(name: &'static str, min: DVec2, max: DVec2) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return invalid(name, f64::NAN);
    }
    let extent = max - min;
    if extent.x < 0.0 || extent.y < 0.0 {
        return invalid(name, extent.min_element());
    }
    Ok(())
}
