//! Text rendering of seeding and refinement results.
//!
//! The first output line lists the seeding indices, followed by one line per
//! centroid with every coordinate printed to 4 decimal places.

use crate::algorithm::fit;
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::init::initialize;
use ndarray::ArrayView2;

/// Comma-separated indices, in the given order
pub fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// One centroid per line, coordinates to 4 decimals, comma-separated
pub fn format_centroids(centroids: &ArrayView2<f64>) -> String {
    centroids
        .outer_iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:.4}", v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indices line followed by the centroid lines
pub fn format_report(indices: &[usize], centroids: &ArrayView2<f64>) -> String {
    format!("{}\n{}", format_indices(indices), format_centroids(centroids))
}

/// Seed, refine and render the result of one clustering run.
///
/// Parameters are checked against `points` before seeding runs, in the same
/// order as [`KMeansConfig::validate`].
pub fn cluster_report(
    points: &ArrayView2<f64>,
    k: usize,
    max_iters: usize,
    eps: f64,
    seed: u64,
) -> Result<String, KMeansError> {
    KMeansConfig::new(k)
        .with_max_iters(max_iters)
        .with_eps(eps)
        .validate(points.nrows())?;

    let seeding = initialize(points, k, seed)?;
    let centroids = fit(k, max_iters, eps, points, &seeding.centroids.view())?;

    Ok(format_report(&seeding.indices, &centroids.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_format_indices() {
        assert_eq!(format_indices(&[3, 0, 17]), "3,0,17");
        assert_eq!(format_indices(&[]), "");
    }

    #[test]
    fn test_format_centroids() {
        let c = array![[1.1, 0.95], [4.05, -3.123456]];
        assert_eq!(format_centroids(&c.view()), "1.1000,0.9500\n4.0500,-3.1235");
    }

    #[test]
    fn test_format_report() {
        let c = array![[1.0, 2.0], [-0.5, 0.25]];
        assert_eq!(format_report(&[4, 1], &c.view()), "4,1\n1.0000,2.0000\n-0.5000,0.2500");
    }

    #[test]
    fn test_cluster_report() {
        let points = array![[1.0, 1.0], [1.2, 0.9], [4.0, 4.0], [4.1, 3.9]];

        let report = cluster_report(&points.view(), 2, 300, 1e-4, 1234).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 3);
        let indices: Vec<usize> = lines[0].split(',').map(|s| s.parse().unwrap()).collect();
        assert_eq!(indices.len(), 2);
        assert!(indices.iter().all(|&i| i < 4));
        let mut centroid_lines = lines[1..].to_vec();
        centroid_lines.sort_unstable();
        assert_eq!(centroid_lines, vec!["1.1000,0.9500", "4.0500,3.9500"]);
    }

    #[test]
    fn test_cluster_report_rejects_params_before_seeding() {
        let points = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];

        assert!(matches!(
            cluster_report(&points.view(), 3, 10, 0.1, 0),
            Err(KMeansError::InvalidClusterCount { k: 3, n_samples: 3 })
        ));
        assert!(matches!(
            cluster_report(&points.view(), 2, 800, 0.1, 0),
            Err(KMeansError::InvalidIterationBudget { .. })
        ));
    }
}
