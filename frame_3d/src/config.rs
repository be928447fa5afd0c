//! Numeric thresholds used by the vector-math layer.
//!
//! All `*_with` operations take a `&Tolerance`; the plain variants use
//! `Tolerance::default()`.

/// Tolerances for normalization, orthonormalization and frame validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Lengths at or below this are treated as zero
    pub zero_length: f64,
    /// Relative Gram-Schmidt residual at or below which inputs count as parallel
    pub parallel: f64,
    /// Allowed deviation of a direction's length from 1
    pub unit_length: f64,
    /// Allowed absolute dot product between two basis directions
    pub orthogonality: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            zero_length: 1e-12,
            parallel: 1e-9,
            unit_length: 1e-9,
            orthogonality: 1e-9,
        }
    }
}

impl Tolerance {
    /// Tolerance suited to data that went through f32 (GPU matrices, meshes)
    pub fn single_precision() -> Self {
        Self {
            zero_length: 1e-6,
            parallel: 1e-5,
            unit_length: 1e-5,
            orthogonality: 1e-5,
        }
    }

    /// True if `length` counts as zero
    pub(crate) fn is_zero_length(&self, length: f64) -> bool {
        length <= self.zero_length
    }

    /// True if a residual left after removing components of `input_length`
    /// is small enough to count as linear dependence
    pub(crate) fn is_parallel_residual(&self, residual: f64, input_length: f64) -> bool {
        residual <= self.zero_length.max(self.parallel * input_length)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
