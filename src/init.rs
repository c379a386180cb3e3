use crate::config::{validate_k, ParamLimits};
use crate::distance::squared_euclidean;
use crate::error::KMeansError;
use log::{debug, info};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Output of k-means++ seeding
#[derive(Debug, Clone, PartialEq)]
pub struct Seeding {
    /// Indices of the chosen points, in selection order
    pub indices: Vec<usize>,

    /// Copies of the chosen points' coordinates (k, n_features)
    pub centroids: Array2<f64>,
}

/// Pick `k` initial centroids from `points` with k-means++ seeding.
///
/// A fresh `ChaCha8Rng` is seeded from `seed` for every call, so the same
/// points, `k` and `seed` always produce the same indices.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidClusterCount`] if `k < 2` or `k >= n_samples`
/// (which includes an empty point set), and
/// [`KMeansError::DimensionMismatch`] if the points have no columns.
/// Returns [`KMeansError::EngineFailure`] if a squared distance is NaN or
/// overflows to infinity.
pub fn initialize(points: &ArrayView2<f64>, k: usize, seed: u64) -> Result<Seeding, KMeansError> {
    initialize_with_limits(points, k, seed, &ParamLimits::default())
}

/// Same as [`initialize`], validating `k` against custom bounds
pub fn initialize_with_limits(
    points: &ArrayView2<f64>,
    k: usize,
    seed: u64,
    limits: &ParamLimits,
) -> Result<Seeding, KMeansError> {
    validate_k(k, points.nrows(), limits)?;
    if points.ncols() == 0 {
        return Err(KMeansError::DimensionMismatch(
            "points must have at least one dimension".to_string(),
        ));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let indices = kmeans_plusplus(points, k, &mut rng)?;
    let centroids = points.select(Axis(0), &indices);

    info!("k-means++ selected indices {:?}", indices);

    Ok(Seeding { indices, centroids })
}

/// Core k-means++ selection loop.
///
/// Selection weights are squared distances to the nearest already chosen
/// point, divided by their maximum. Weighted draws go through `WeightedIndex`
/// (cumulative weights, inverse-CDF lookup of a uniform sample).
fn kmeans_plusplus(
    points: &ArrayView2<f64>,
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<usize>, KMeansError> {
    let n_samples = points.nrows();
    let mut indices = Vec::with_capacity(k);

    let first = rng.gen_range(0..n_samples);
    indices.push(first);

    let first_point = points.row(first);
    let mut min_dists: Array1<f64> = points
        .outer_iter()
        .map(|p| squared_euclidean(&p, &first_point))
        .collect();

    for _ in 1..k {
        if min_dists.iter().any(|d| !d.is_finite()) {
            return Err(KMeansError::EngineFailure(
                "non-finite distance during k-means++ seeding".to_string(),
            ));
        }
        let max_dist = min_dists.iter().copied().fold(0.0, f64::max);

        let next = if max_dist == 0.0 {
            debug!("all points coincide with chosen centroids, drawing uniformly");
            rng.gen_range(0..n_samples)
        } else {
            // Scaled to at most 1 so the cumulative sum cannot overflow
            let weights = &min_dists / max_dist;
            let sampler: WeightedIndex<f64> = WeightedIndex::new(weights.iter())
                .map_err(|e| KMeansError::EngineFailure(format!("weighted draw failed: {}", e)))?;
            sampler.sample(rng)
        };
        indices.push(next);

        let chosen = points.row(next);
        for (dist, p) in min_dists.iter_mut().zip(points.outer_iter()) {
            let d = squared_euclidean(&p, &chosen);
            if d < *dist {
                *dist = d;
            }
        }
    }

    Ok(indices)
}
