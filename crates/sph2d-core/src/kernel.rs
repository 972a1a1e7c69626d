use std::f64::consts::TAU;

use glam::DVec2;

/// Gaussian smoothing kernel.
///
/// Returns `W(d, h) = 1 / (h * sqrt(2 * PI)) * exp(-|d|^2 / (2 * h^2))`.
/// Has no compact support and stays finite at `d = 0`.
#[inline]
pub fn gaussian_kernel(d: DVec2, h: f64) -> f64 {
    let coeff = 1.0 / (h * TAU.sqrt());
    coeff * (-d.length_squared() / (2.0 * h * h)).exp()
}

/// Gradient of [`gaussian_kernel`] with respect to `d`.
///
/// Returns `-1 / (h^3 * sqrt(2 * PI)) * exp(-|d|^2 / (2 * h^2)) * d`, which
/// points against `d` and vanishes at `d = 0`.
#[inline]
pub fn gaussian_gradient(d: DVec2, h: f64) -> DVec2 {
    let coeff = -1.0 / (h * h * h * TAU.sqrt());
    coeff * (-d.length_squared() / (2.0 * h * h)).exp() * d
}
