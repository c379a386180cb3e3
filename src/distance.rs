use ndarray::{Array1, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Squared Euclidean distance between two points of equal length
#[inline]
pub fn squared_euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance between two points of equal length
#[inline]
pub fn euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Find the nearest centroid of a single point.
///
/// Returns `(index, squared_distance)`. Centroids are compared by Euclidean
/// distance, after the square root, and ties go to the lowest centroid index.
#[inline]
pub fn nearest_centroid(point: &ArrayView1<f64>, centroids: &ArrayView2<f64>) -> (usize, f64) {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;
    let mut best_sq = f64::INFINITY;

    for (j, centroid) in centroids.outer_iter().enumerate() {
        let sq = squared_euclidean(point, &centroid);
        let dist = sq.sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_sq = sq;
            best_label = j;
        }
    }

    (best_label, best_sq)
}

/// Assign every point to its nearest centroid.
///
/// Points are processed in parallel, but each label depends only on its own
/// row, so the output matches a sequential pass exactly.
///
/// # Returns
/// * `labels` - Cluster assignment for each point (n_samples,)
/// * `sq_dists` - Squared distance from each point to its centroid (n_samples,)
pub fn find_nearest_centroids(
    points: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
) -> (Array1<usize>, Array1<f64>) {
    let (labels, sq_dists): (Vec<usize>, Vec<f64>) = (0..points.nrows())
        .into_par_iter()
        .map(|i| nearest_centroid(&points.row(i), centroids))
        .unzip();

    (Array1::from(labels), Array1::from(sq_dists))
}

/// Largest Euclidean displacement of any centroid between two iterations
pub fn max_centroid_shift(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> f64 {
    let k = old_centroids.nrows();

    (0..k)
        .into_par_iter()
        .map(|i| euclidean(&old_centroids.row(i), &new_centroids.row(i)))
        .reduce(|| 0.0, f64::max)
}

/// Total within-cluster squared distance for a given assignment
pub fn inertia(
    points: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> f64 {
    points
        .outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_euclidean(&point, &centroids.row(label)))
        .sum()
}
