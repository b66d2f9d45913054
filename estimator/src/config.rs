use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable naming the model artifact.
pub const MODEL_PATH_VAR: &str = "ESTIMATOR_MODEL_PATH";

/// Artifact used when [`MODEL_PATH_VAR`] is not set.
pub const DEFAULT_MODEL_PATH: &str = "assets/house_price_lr_fe.json";

/// Startup settings for an [`Estimator`](crate::Estimator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    model_path: PathBuf,
}

impl EstimatorConfig {
    /// Creates a new estimator configuration.
    ///
    /// # Args
    /// * `model_path` - Path to the JSON model bundle.
    ///
    /// # Returns
    /// An `EstimatorConfig` instance.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// Reads the configuration from the environment, falling back to
    /// [`DEFAULT_MODEL_PATH`].
    pub fn from_env() -> Self {
        Self::new(env::var(MODEL_PATH_VAR).unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string()))
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}
