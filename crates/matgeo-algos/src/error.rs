//! Error types for the numeric routines
//!
//! Rank, eigenvalue and product routines always return a value; only the
//! conic solver reports errors.

use thiserror::Error;

/// Errors from the conic solvers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    /// Vertical line: the curve never has a vertical tangent
    #[error("Line is vertical (B = 0); no tangent of the curve is parallel to it")]
    VerticalLine,

    /// Requested tangent slope is not attained by the curve
    #[error("No point on the curve has tangent slope {slope}")]
    NoContactPoint { slope: f64 },
}

/// Result type for the numeric routines
pub type AlgoResult<T> = Result<T, AlgoError>;
