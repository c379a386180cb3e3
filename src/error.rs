use thiserror::Error;

/// Error types for the kmeanspp-rs library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// The number of clusters is outside the valid range (k >= min_k and k < n_samples)
    #[error("Incorrect number of clusters: k = {k} with {n_samples} samples")]
    InvalidClusterCount { k: usize, n_samples: usize },

    /// The iteration budget is zero or not below the configured limit
    #[error("Incorrect maximum iteration: {max_iters} (must be in 1..{limit})")]
    InvalidIterationBudget { max_iters: usize, limit: usize },

    /// The convergence threshold is negative or NaN
    #[error("Incorrect epsilon: {0}")]
    InvalidEpsilon(f64),

    /// Rows of unequal length, or centroids that do not match the data
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,

    /// Unexpected internal fault
    #[error("Engine failure: {0}")]
    EngineFailure(String),
}
