mod artifact;
mod linear;

use ndarray::{Array1, ArrayView2};

use crate::error::PredictError;

pub use artifact::{ModelBundle, ModelSpec};
pub use linear::LinearRegression;

/// An opaque inference capability.
///
/// Implementors only need to be safe for concurrent read-only use, the
/// predictor never mutates the model once loaded.
pub trait Regressor: Send + Sync {
    /// Returns the number of columns the model expects per row.
    fn n_features(&self) -> usize;

    /// Predicts one value per row of `x`.
    ///
    /// # Arguments
    /// * `x` - A `(rows, n_features)` matrix of features.
    ///
    /// # Returns
    /// The estimates, one per row, or an error if `x` has the wrong shape.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError>;
}
