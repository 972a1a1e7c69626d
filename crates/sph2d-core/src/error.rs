use thiserror::Error;

/// Errors raised while assembling a particle system or validating its
/// parameters. Stepping itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SphError {
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("fluid count {fluid_count} exceeds total particle count {total}")]
    FluidCountExceedsTotal { fluid_count: usize, total: usize },
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, SphError>;
