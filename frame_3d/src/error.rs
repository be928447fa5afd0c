//! Error types for Frame3D
//!
//! The core conversions (`model_matrix`, `view_matrix`, `model_view_matrix`,
//! `look_at`) are total and never return these. They are produced by the
//! fallible constructors of the vector-math layer (normalization,
//! orthonormalization, frame validation).

use std::fmt;

/// Result type for Frame3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frame3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Vector too short to be normalized into a direction
    ZeroLengthVector(String),

    /// NaN or infinite component
    NonFiniteValue(String),

    /// Orthonormalization inputs are linearly dependent
    DegenerateBasis(String),

    /// Frame basis is not unit length, not orthogonal, or left-handed
    NotOrthonormal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroLengthVector(msg) => write!(f, "Zero-length vector: {}", msg),
            Error::NonFiniteValue(msg) => write!(f, "Non-finite value: {}", msg),
            Error::DegenerateBasis(msg) => write!(f, "Degenerate basis: {}", msg),
            Error::NotOrthonormal(msg) => write!(f, "Not orthonormal: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
