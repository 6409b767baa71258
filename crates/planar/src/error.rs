//! Error type for plane geometry operations.
//!
//! Only precondition failures are errors. Floating-point degeneracies are
//! returned as values (`inf`/`NaN`) and never mapped into this type.

use thiserror::Error;

/// Errors raised by the geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Fewer points than the operation needs.
    #[error("need at least {required} points, got {got}")]
    NotEnoughPoints {
        /// Minimum number of points accepted
        required: usize,
        /// Number of points supplied
        got: usize,
    },

    /// Fewer circles than the operation needs.
    #[error("need at least {required} circles, got {got}")]
    NotEnoughCircles {
        /// Minimum number of circles accepted
        required: usize,
        /// Number of circles supplied
        got: usize,
    },

    /// Three points have no finite circumcircle.
    #[error("points are collinear; no circle passes through all three")]
    Collinear,
}

impl GeomError {
    /// True for errors caused by an undersized input sequence.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeomError::NotEnoughPoints { .. } | GeomError::NotEnoughCircles { .. }
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
