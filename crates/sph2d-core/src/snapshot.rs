use glam::DVec2;

/// Positions of every particle after one simulated step.
///
/// Fluid particles occupy `[0, fluid_count)`, boundary particles the rest,
/// in the same order as the [`ParticleSystem`](crate::particle::ParticleSystem)
/// they were captured from.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    positions: Vec<DVec2>,
    fluid_count: usize,
}

impl Frame {
    pub fn new(positions: Vec<DVec2>, fluid_count: usize) -> Self {
        debug_assert!(fluid_count <= positions.len());
        Self {
            positions,
            fluid_count,
        }
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn fluid(&self) -> &[DVec2] {
        &self.positions[..self.fluid_count]
    }

    pub fn boundary(&self) -> &[DVec2] {
        &self.positions[self.fluid_count..]
    }

    pub fn fluid_count(&self) -> usize {
        self.fluid_count
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw `[x0, y0, x1, y1, ...]` f64 bytes, ready to upload to a renderer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Single-precision copy for playback, which has no use for f64.
    pub fn to_f32(&self) -> Vec<[f32; 2]> {
        self.positions
            .iter()
            .map(|p| p.as_vec2().to_array())
            .collect()
    }
}
