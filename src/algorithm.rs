use crate::config::{validate_eps, validate_k, validate_max_iters, ParamLimits};
use crate::distance::{find_nearest_centroids, max_centroid_shift};
use crate::error::KMeansError;
use log::{debug, info};
use ndarray::{Array1, Array2, ArrayView2};
use std::time::Instant;

/// Why refinement stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The largest centroid displacement fell below `eps`
    Converged,
    /// The iteration budget ran out first
    Exhausted,
}

/// Result of a Lloyd refinement run
#[derive(Debug, Clone)]
pub struct RefineResult {
    pub centroids: Array2<f64>,
    /// Assignment from the last ASSIGN step
    pub labels: Array1<usize>,
    pub n_iterations: usize,
    pub stop: StopReason,
    /// Total within-cluster squared distance of each iteration's assignment
    pub inertia_history: Vec<f64>,
}

/// Refine `initial_centroids` with Lloyd's algorithm and return the final centroids.
///
/// Whether refinement converged or ran out of iterations is not reported; use
/// [`refine`] for the full trace.
///
/// # Arguments
/// * `k` - Number of clusters; must match the rows of `initial_centroids`
/// * `max_iters` - Iteration budget, in `1..800`
/// * `eps` - Convergence threshold on the largest centroid displacement
/// * `points` - Data of shape (n_samples, n_features)
/// * `initial_centroids` - Starting centroids of shape (k, n_features)
pub fn fit(
    k: usize,
    max_iters: usize,
    eps: f64,
    points: &ArrayView2<f64>,
    initial_centroids: &ArrayView2<f64>,
) -> Result<Array2<f64>, KMeansError> {
    refine(k, max_iters, eps, points, initial_centroids).map(|result| result.centroids)
}

/// Same as [`fit`], returning labels, iteration count, stop reason and the
/// per-iteration inertia alongside the centroids.
pub fn refine(
    k: usize,
    max_iters: usize,
    eps: f64,
    points: &ArrayView2<f64>,
    initial_centroids: &ArrayView2<f64>,
) -> Result<RefineResult, KMeansError> {
    check_params(
        k,
        max_iters,
        eps,
        points,
        initial_centroids,
        &ParamLimits::default(),
    )?;
    Ok(lloyd(points, initial_centroids, max_iters, eps))
}

/// Validate every refinement input before any work is done
fn check_params(
    k: usize,
    max_iters: usize,
    eps: f64,
    points: &ArrayView2<f64>,
    initial_centroids: &ArrayView2<f64>,
    limits: &ParamLimits,
) -> Result<(), KMeansError> {
    validate_k(k, points.nrows(), limits)?;
    validate_max_iters(max_iters, limits)?;
    validate_eps(eps)?;

    if points.ncols() == 0 {
        return Err(KMeansError::DimensionMismatch(
            "points must have at least one dimension".to_string(),
        ));
    }
    if initial_centroids.nrows() != k {
        return Err(KMeansError::DimensionMismatch(format!(
            "Expected {} initial centroids, got {}",
            k,
            initial_centroids.nrows()
        )));
    }
    if initial_centroids.ncols() != points.ncols() {
        return Err(KMeansError::DimensionMismatch(format!(
            "Centroids have {} features, points have {}",
            initial_centroids.ncols(),
            points.ncols()
        )));
    }

    Ok(())
}

/// Run Lloyd's algorithm on already validated inputs.
///
/// Each iteration assigns every point to its nearest centroid, then moves each
/// centroid to the mean of its points. A centroid with no points keeps its
/// previous position. The loop stops when the largest displacement is below
/// `eps` or after `max_iters` iterations.
pub(crate) fn lloyd(
    points: &ArrayView2<f64>,
    initial_centroids: &ArrayView2<f64>,
    max_iters: usize,
    eps: f64,
) -> RefineResult {
    let n_samples = points.nrows();
    let n_features = points.ncols();
    let k = initial_centroids.nrows();

    let mut centroids = initial_centroids.to_owned();
    let mut labels = Array1::zeros(n_samples);
    let mut inertia_history = Vec::with_capacity(max_iters);
    let mut n_iterations = 0;
    let mut stop = StopReason::Exhausted;

    debug!(
        "Refining {} centroids over {} samples, {} features",
        k, n_samples, n_features
    );

    for iteration in 0..max_iters {
        let iter_start = Instant::now();
        n_iterations = iteration + 1;

        // ASSIGN
        let (new_labels, sq_dists) = find_nearest_centroids(points, &centroids.view());
        labels = new_labels;
        inertia_history.push(sq_dists.sum());

        // UPDATE, accumulated sequentially in point order
        let mut cluster_sums: Array2<f64> = Array2::zeros((k, n_features));
        let mut cluster_counts = vec![0usize; k];

        for (point, &label) in points.outer_iter().zip(labels.iter()) {
            cluster_counts[label] += 1;
            let mut sum = cluster_sums.row_mut(label);
            sum += &point;
        }

        let prev_centroids = centroids.clone();

        for (cluster_idx, &count) in cluster_counts.iter().enumerate() {
            if count > 0 {
                let mean = &cluster_sums.row(cluster_idx) / count as f64;
                centroids.row_mut(cluster_idx).assign(&mean);
            } else {
                debug!("  Cluster {} is empty, keeping previous centroid", cluster_idx);
            }
        }

        let shift = max_centroid_shift(&prev_centroids.view(), &centroids.view());

        debug!(
            "  Iteration {}/{}: max shift = {:.6}, time = {:.4}s",
            iteration + 1,
            max_iters,
            shift,
            iter_start.elapsed().as_secs_f64()
        );

        if shift < eps {
            stop = StopReason::Converged;
            break;
        }
    }

    match stop {
        StopReason::Converged => info!(
            "Converged after {} iterations (eps {})",
            n_iterations, eps
        ),
        StopReason::Exhausted => info!(
            "Stopped after exhausting {} iterations without converging",
            n_iterations
        ),
    }

    RefineResult {
        centroids,
        labels,
        n_iterations,
        stop,
        inertia_history,
    }
}

/// Predict cluster assignments for new data using trained centroids
pub fn predict_labels(points: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    find_nearest_centroids(points, centroids).0
}
