//! Basic example demonstrating kmeanspp-rs usage
//!
//! Run with: cargo run --example basic --release

use kmeanspp_rs::{format_centroids, format_indices, KMeansConfig, KMeansPP};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    println!("=== kmeanspp-rs example ===\n");

    // Generate synthetic data: 3 clusters in 2D
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    println!("Generating {} samples with {} features...", n_samples, n_features);

    let mut data = Array2::<f64>::zeros((n_samples, n_features));
    let centers = [[-5.0, -5.0], [0.0, 5.0], [5.0, -5.0]];

    for i in 0..n_samples {
        let cluster_idx = i % 3;
        let noise = Array2::random((1, n_features), Uniform::new(-1.0, 1.0));
        data[[i, 0]] = centers[cluster_idx][0] + noise[[0, 0]];
        data[[i, 1]] = centers[cluster_idx][1] + noise[[0, 1]];
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    let config = KMeansConfig::new(n_clusters)
        .with_max_iters(100)
        .with_eps(1e-6)
        .with_seed(42);

    println!("Running k-means with k={}...\n", n_clusters);

    let mut kmeans = KMeansPP::with_config(config);
    kmeans.train(&data.view()).expect("Training failed");

    let indices = kmeans.initial_indices().unwrap();
    println!("Seeding indices: {}", format_indices(indices));
    println!("Iterations: {}\n", kmeans.n_iterations());

    println!("Learned centroids:");
    println!("{}\n", format_centroids(&kmeans.centroids().unwrap().view()));

    let labels = kmeans.predict(&data.view()).expect("Prediction failed");

    let mut cluster_counts = vec![0usize; n_clusters];
    for &label in labels.iter() {
        cluster_counts[label] += 1;
    }

    println!("Cluster distribution:");
    for (i, count) in cluster_counts.iter().enumerate() {
        println!(
            "  Cluster {}: {} samples ({:.1}%)",
            i,
            count,
            (*count as f64 / n_samples as f64) * 100.0
        );
    }

    println!("\n=== Done! ===");
}
