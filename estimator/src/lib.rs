pub mod config;
pub mod error;
pub mod features;
pub mod input;
pub mod model;
pub mod prediction;
pub mod predictor;
pub mod validation;

use std::sync::Arc;

use log::debug;

pub use config::EstimatorConfig;
pub use error::{ConfigError, EstimateError, PredictError, ValidationErrors};
pub use features::{Feature, FeatureManifest, FeatureRecord};
pub use input::{Field, RawInput};
pub use prediction::PredictionResult;
pub use predictor::Predictor;
pub use validation::{ValidatedProperty, validate};

/// The entry point of the core: validates a submission, assembles its features
/// and asks the loaded model for a price.
///
/// Cloning is cheap, every clone shares the same read-only predictor.
#[derive(Clone)]
pub struct Estimator {
    predictor: Arc<Predictor>,
}

impl Estimator {
    /// Wraps an already built predictor.
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
        }
    }

    /// Loads the model artifact named by `config`.
    ///
    /// Meant to run once at process start.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the artifact cannot be used; the process
    /// should not serve any request in that case.
    pub fn load(config: &EstimatorConfig) -> Result<Self, ConfigError> {
        Predictor::load(config.model_path()).map(Self::new)
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    /// Estimates the price of the submitted property.
    ///
    /// # Errors
    /// Returns `EstimateError::Invalid` with every field message if the input
    /// does not validate, in which case the model is not invoked, and
    /// `EstimateError::Predict` if the model output is unusable.
    pub fn estimate(&self, raw: &RawInput) -> Result<PredictionResult, EstimateError> {
        let property = validate(raw)?;
        let record = FeatureRecord::from(property);
        debug!("assembled {record:?}");

        Ok(self.predictor.predict(&record)?)
    }
}
