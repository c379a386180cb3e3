//! # kmeanspp-rs
//!
//! K-means clustering for ndarray data: seeded k-means++ initialization
//! followed by Lloyd refinement.
//!
//! ## Features
//!
//! - **Reproducible seeding**: the same points, `k` and seed always select the
//!   same initial indices
//! - **Lloyd refinement**: stops when no centroid moves by `eps` or more, or when
//!   the iteration budget runs out; empty clusters keep their previous centroid
//! - **Parallel assignment**: nearest-centroid lookup uses rayon without
//!   changing results
//!
//! ## Example
//!
//! ```rust
//! use kmeanspp_rs::{fit, initialize};
//! use ndarray::array;
//!
//! let points = array![[1.0, 1.0], [1.2, 0.9], [4.0, 4.0], [4.1, 3.9]];
//!
//! let seeding = initialize(&points.view(), 2, 1234).unwrap();
//! assert_eq!(seeding.indices.len(), 2);
//!
//! let centroids = fit(2, 300, 1e-4, &points.view(), &seeding.centroids.view()).unwrap();
//! assert_eq!(centroids.dim(), (2, 2));
//! ```
//!
//! ## Model API
//!
//! ```rust
//! use kmeanspp_rs::{KMeansConfig, KMeansPP};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//!
//! let data = Array2::random((1000, 16), Uniform::new(-1.0, 1.0));
//!
//! let config = KMeansConfig::new(10)
//!     .with_max_iters(100)
//!     .with_eps(1e-6)
//!     .with_seed(42);
//!
//! let mut kmeans = KMeansPP::with_config(config);
//! let labels = kmeans.fit_predict(&data.view()).unwrap();
//! assert_eq!(labels.len(), 1000);
//! assert_eq!(kmeans.initial_indices().unwrap().len(), 10);
//! ```

mod algorithm;
mod config;
mod data;
mod distance;
mod error;
mod format;
mod init;
mod kmeans;

pub use algorithm::{fit, predict_labels, refine, RefineResult, StopReason};
pub use config::{KMeansConfig, ParamLimits};
pub use data::points_from_rows;
pub use distance::inertia;
pub use error::KMeansError;
pub use format::{cluster_report, format_centroids, format_indices, format_report};
pub use init::{initialize, initialize_with_limits, Seeding};
pub use kmeans::KMeansPP;
