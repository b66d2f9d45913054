use std::path::Path;

use log::{debug, info, warn};

use crate::{
    error::{ConfigError, PredictError},
    features::{FeatureManifest, FeatureRecord},
    model::{ModelBundle, Regressor},
    prediction::PredictionResult,
};

/// Forwards feature records to a loaded model and reads back its estimate.
///
/// Built once at startup and never mutated afterwards.
pub struct Predictor {
    model: Box<dyn Regressor>,
    manifest: FeatureManifest,
}

impl Predictor {
    /// Creates a new `Predictor`.
    ///
    /// # Arguments
    /// * `model` - The inference capability.
    /// * `manifest` - The columns `model` expects, in order.
    ///
    /// # Errors
    /// Returns `ConfigError::ShapeMismatch` if the model and manifest disagree on
    /// the number of columns.
    pub fn new(model: Box<dyn Regressor>, manifest: FeatureManifest) -> Result<Self, ConfigError> {
        if model.n_features() != manifest.len() {
            return Err(ConfigError::ShapeMismatch {
                what: "model inputs",
                got: model.n_features(),
                expected: manifest.len(),
            });
        }

        Ok(Self { model, manifest })
    }

    /// Loads a model bundle from disk.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the artifact is missing or corrupt, or if its
    /// manifest cannot be satisfied.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("loading model artifact from {}", path.display());

        let bundle = ModelBundle::read(path)?;
        let manifest = FeatureManifest::resolve(&bundle.features)?;
        let predictor = Self::new(bundle.model.build(), manifest)?;

        info!(features = predictor.manifest.len(); "model artifact loaded");
        Ok(predictor)
    }

    pub fn manifest(&self) -> &FeatureManifest {
        &self.manifest
    }

    /// Estimates the price of a single property.
    ///
    /// # Errors
    /// Returns a `PredictError` if the model output is missing or not finite.
    pub fn predict(&self, record: &FeatureRecord) -> Result<PredictionResult, PredictError> {
        let x = self.manifest.project(record);
        debug!("predicting on row {:?}", x.row(0).to_vec());

        let y = self.model.predict(x.view())?;
        let value = *y.first().ok_or(PredictError::EmptyOutput)?;

        if !value.is_finite() {
            return Err(PredictError::NonFinite(value));
        }
        if value < 0.0 {
            warn!("model returned a negative estimate ({value}), reporting 0");
        }

        Ok(PredictionResult::new(value))
    }
}
