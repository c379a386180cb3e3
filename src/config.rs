use crate::error::KMeansError;

/// Policy bounds applied when validating a [`KMeansConfig`].
///
/// These are not algorithmic requirements: Lloyd's algorithm works for any
/// `k >= 1` and any positive iteration count. They exist so callers can
/// enforce the same parameter contract as the reference tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamLimits {
    /// Smallest accepted number of clusters (inclusive)
    pub min_k: usize,

    /// Iteration budgets must be strictly below this value
    pub max_iters_exclusive: usize,
}

impl Default for ParamLimits {
    fn default() -> Self {
        Self {
            min_k: 2,
            max_iters_exclusive: 800,
        }
    }
}

/// Configuration for seeding and refinement
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of refinement iterations
    pub max_iters: usize,

    /// Convergence threshold. Refinement stops once the largest centroid
    /// displacement of an iteration is strictly below this value.
    pub eps: f64,

    /// Random seed for k-means++ initialization
    pub seed: u64,

    /// Bounds checked by [`KMeansConfig::validate`]
    pub limits: ParamLimits,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iters: 300,
            eps: 1e-3,
            seed: 1234,
            limits: ParamLimits::default(),
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence threshold
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the validation bounds
    pub fn with_limits(mut self, limits: ParamLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Check the parameters against a dataset of `n_samples` points.
    ///
    /// Checks run in the order k, max_iters, eps; the first violation is returned.
    pub fn validate(&self, n_samples: usize) -> Result<(), KMeansError> {
        validate_k(self.k, n_samples, &self.limits)?;
        validate_max_iters(self.max_iters, &self.limits)?;
        validate_eps(self.eps)
    }
}

pub(crate) fn validate_k(
    k: usize,
    n_samples: usize,
    limits: &ParamLimits,
) -> Result<(), KMeansError> {
    if k < limits.min_k || k >= n_samples {
        return Err(KMeansError::InvalidClusterCount { k, n_samples });
    }
    Ok(())
}

pub(crate) fn validate_max_iters(
    max_iters: usize,
    limits: &ParamLimits,
) -> Result<(), KMeansError> {
    if max_iters == 0 || max_iters >= limits.max_iters_exclusive {
        return Err(KMeansError::InvalidIterationBudget {
            max_iters,
            limit: limits.max_iters_exclusive,
        });
    }
    Ok(())
}

pub(crate) fn validate_eps(eps: f64) -> Result<(), KMeansError> {
    if eps.is_nan() || eps < 0.0 {
        return Err(KMeansError::InvalidEpsilon(eps));
    }
    Ok(())
}
