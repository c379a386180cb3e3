use crate::error::KMeansError;
use ndarray::Array2;

/// Build a point matrix from row vectors.
///
/// Fails with [`KMeansError::DimensionMismatch`] if the rows differ in length
/// or have no coordinates. An empty row list yields a `(0, 0)` matrix.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, KMeansError> {
    let Some(first) = rows.first() else {
        return Ok(Array2::zeros((0, 0)));
    };

    let n_features = first.len();
    if n_features == 0 {
        return Err(KMeansError::DimensionMismatch(
            "points must have at least one dimension".to_string(),
        ));
    }

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_features) {
        return Err(KMeansError::DimensionMismatch(format!(
            "Row {} has {} values, expected {}",
            i,
            row.len(),
            n_features
        )));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), n_features), flat)
        .map_err(|e| KMeansError::EngineFailure(e.to_string()))
}
