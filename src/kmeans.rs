use crate::algorithm::{lloyd, predict_labels};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use crate::init::initialize_with_limits;
use ndarray::{Array1, Array2, ArrayView2};

/// K-means model with k-means++ seeding and Lloyd refinement.
///
/// Training runs the seeded initializer and then refines the chosen centroids.
/// The indices picked during seeding are kept so callers can report them.
///
/// # Example
///
/// ```
/// use kmeanspp_rs::KMeansPP;
/// use ndarray::array;
///
/// let data = array![[1.0, 1.0], [1.2, 0.9], [4.0, 4.0], [4.1, 3.9]];
///
/// let mut kmeans = KMeansPP::new(2);
/// kmeans.train(&data.view()).unwrap();
///
/// let labels = kmeans.predict(&data.view()).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
pub struct KMeansPP {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions), 0 until first trained
    d: usize,

    /// Point indices chosen by k-means++ during the last training
    initial_indices: Option<Vec<usize>>,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f64>>,

    n_iterations: usize,
}

impl KMeansPP {
    /// Create a new model with default configuration and `k` clusters.
    ///
    /// `k` is validated against the data when training.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new model with custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            config,
            d: 0,
            initial_indices: None,
            centroids: None,
            n_iterations: 0,
        }
    }

    /// Train the model on the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid for this many samples
    /// - Data dimensions don't match a previous training call
    pub fn train(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        let n_features = data.ncols();

        if self.d != 0 && n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let config = &self.config;
        config.validate(data.nrows())?;

        let seeding = initialize_with_limits(data, config.k, config.seed, &config.limits)?;
        let result = lloyd(data, &seeding.centroids.view(), config.max_iters, config.eps);

        self.d = n_features;
        self.initial_indices = Some(seeding.indices);
        self.centroids = Some(result.centroids);
        self.n_iterations = result.n_iterations;
        Ok(())
    }

    /// Fit the model to the data. Equivalent to `train()`.
    ///
    /// # Returns
    ///
    /// Returns `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &ArrayView2<f64>) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict cluster assignments for new data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Data dimensions don't match the training data
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(predict_labels(data, &centroids.view()))
    }

    /// Fit the model and predict cluster assignments in one call.
    pub fn fit_predict(&mut self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        self.train(data)?;
        self.predict(data)
    }

    /// Get the centroids of the fitted model.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.centroids.as_ref()
    }

    /// Point indices chosen by k-means++, in selection order.
    pub fn initial_indices(&self) -> Option<&[usize]> {
        self.initial_indices.as_deref()
    }

    /// Number of refinement iterations run by the last training call.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions), 0 before training.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    #[test]
    fn test_kmeanspp_new() {
        let kmeans = KMeansPP::new(10);
        assert_eq!(kmeans.k(), 10);
        assert_eq!(kmeans.d(), 0);
        assert!(kmeans.centroids().is_none());
        assert!(kmeans.initial_indices().is_none());
    }

    #[test]
    fn test_kmeanspp_train() {
        let data = Array2::random((500, 32), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeansPP::new(5);

        kmeans.train(&data.view()).unwrap();

        let centroids = kmeans.centroids().unwrap();
        assert_eq!(centroids.nrows(), 5);
        assert_eq!(centroids.ncols(), 32);
        assert_eq!(kmeans.d(), 32);
        assert_eq!(kmeans.initial_indices().unwrap().len(), 5);
        assert!(kmeans.n_iterations() >= 1);
    }

    #[test]
    fn test_kmeanspp_fit() {
        let data = Array2::random((500, 32), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeansPP::new(5);

        let result = kmeans.fit(&data.view());
        assert!(result.is_ok());
        assert!(kmeans.centroids().is_some());
    }

    #[test]
    fn test_kmeanspp_predict() {
        let train_data = Array2::random((500, 16), Uniform::new(-1.0, 1.0));
        let test_data = Array2::random((100, 16), Uniform::new(-1.0, 1.0));

        let mut kmeans = KMeansPP::new(8);
        kmeans.train(&train_data.view()).unwrap();

        let labels = kmeans.predict(&test_data.view()).unwrap();
        assert_eq!(labels.len(), 100);
        assert!(labels.iter().all(|&label| label < 8));
    }

    #[test]
    fn test_kmeanspp_predict_before_fit() {
        let data = Array2::random((100, 8), Uniform::new(-1.0, 1.0));
        let kmeans = KMeansPP::new(5);

        let result = kmeans.predict(&data.view());
        assert!(matches!(result, Err(KMeansError::NotFitted)));
    }

    #[test]
    fn test_kmeanspp_dimension_mismatch() {
        let train_data = Array2::random((100, 8), Uniform::new(-1.0, 1.0));
        let test_data = Array2::random((50, 16), Uniform::new(-1.0, 1.0));

        let mut kmeans = KMeansPP::new(5);
        kmeans.train(&train_data.view()).unwrap();

        assert!(matches!(
            kmeans.predict(&test_data.view()),
            Err(KMeansError::DimensionMismatch(_))
        ));
        assert!(matches!(
            kmeans.train(&test_data.view()),
            Err(KMeansError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_kmeanspp_k_one_rejected() {
        let data = Array2::random((20, 2), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeansPP::new(1);

        assert!(matches!(
            kmeans.train(&data.view()),
            Err(KMeansError::InvalidClusterCount { .. })
        ));
        assert!(kmeans.centroids().is_none());
    }
}
