//! Errors from guarded structural comparison

use thiserror::Error;

/// Reasons a guarded comparison gives up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Nested objects went deeper than the configured limit
    #[error("comparison exceeded maximum depth of {max_depth}")]
    DepthExceeded {
        /// The configured limit
        max_depth: usize,
    },

    /// The same pair of objects was reached again while still being compared
    #[error("cyclic structure detected during comparison")]
    Cycle,
}
