use ndarray::{Array1, ArrayView2};

use super::Regressor;
use crate::error::PredictError;

/// An ordinary least squares model: `y = x · coefficients + intercept`.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a new `LinearRegression`.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per feature, in manifest order.
    /// * `intercept` - The bias term.
    ///
    /// # Returns
    /// A new `LinearRegression` instance.
    pub fn new<I>(coefficients: I, intercept: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            coefficients: coefficients.into_iter().collect(),
            intercept,
        }
    }
}

impl Regressor for LinearRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError> {
        if x.ncols() != self.coefficients.len() {
            return Err(PredictError::ShapeMismatch {
                got: x.ncols(),
                expected: self.coefficients.len(),
            });
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predicts_one_value_per_row() {
        let model = LinearRegression::new([2.0, -1.0], 10.0);
        let x = array![[1.0, 1.0], [3.0, 0.5]];

        let y = model.predict(x.view()).unwrap();
        assert_eq!(y.to_vec(), vec![11.0, 15.5]);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let model = LinearRegression::new([1.0, 1.0, 1.0], 0.0);
        let x = array![[1.0, 2.0]];

        assert_eq!(
            model.predict(x.view()),
            Err(PredictError::ShapeMismatch {
                got: 2,
                expected: 3
            })
        );
    }
}
