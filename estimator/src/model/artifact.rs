use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{LinearRegression, Regressor};
use crate::error::ConfigError;

/// The specification for the `Regressor` trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    LinearRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl ModelSpec {
    /// Builds the model this `ModelSpec` describes.
    pub fn build(self) -> Box<dyn Regressor> {
        match self {
            ModelSpec::LinearRegression {
                coefficients,
                intercept,
            } => Box::new(LinearRegression::new(coefficients, intercept)),
        }
    }
}

/// A serialized model together with the feature names it was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelBundle {
    pub features: Vec<String>,
    pub model: ModelSpec,
}

impl ModelBundle {
    /// Reads and parses a JSON bundle.
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Corrupt` if it is not a valid bundle.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_tagged_linear_model() {
        let json = r#"{
            "features": ["net_sqm", "floor"],
            "model": {
                "linear_regression": { "coefficients": [1.5, -2.0], "intercept": 3.0 }
            }
        }"#;

        let bundle: ModelBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.features, vec!["net_sqm", "floor"]);

        let ModelSpec::LinearRegression {
            coefficients,
            intercept,
        } = &bundle.model;
        assert_eq!(coefficients, &vec![1.5, -2.0]);
        assert_eq!(*intercept, 3.0);

        assert_eq!(bundle.model.build().n_features(), 2);
    }

    #[test]
    fn unknown_model_kind_is_rejected() {
        let json = r#"{ "features": ["age"], "model": { "random_forest": {} } }"#;
        assert!(serde_json::from_str::<ModelBundle>(json).is_err());
    }
}
