use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use estimator::{
    ConfigError, EstimateError, Estimator, EstimatorConfig, FeatureManifest, PredictError,
    Predictor, RawInput, model::Regressor,
};
use ndarray::{Array1, ArrayView2};

const MANIFEST: [&str; 7] = [
    "bedroom_count",
    "net_sqm",
    "center_distance",
    "metro_distance",
    "floor",
    "age",
    "sqm_per_bedroom",
];

/// Records every row it is asked to predict on and answers with a fixed price.
#[derive(Clone, Default)]
struct Recorder {
    rows: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl Regressor for Recorder {
    fn n_features(&self) -> usize {
        MANIFEST.len()
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError> {
        let mut rows = self.rows.lock().unwrap();
        rows.extend(x.rows().into_iter().map(|r| r.to_vec()));
        Ok(Array1::from_elem(x.nrows(), 1234.5))
    }
}

fn scenario() -> RawInput {
    RawInput {
        bedroom_count: Some(3),
        net_area: "90".into(),
        floor: "5".into(),
        center_distance: "1200".into(),
        metro_distance: "250".into(),
        age: "10".into(),
    }
}

fn recording_estimator() -> (Estimator, Recorder) {
    let recorder = Recorder::default();
    let manifest = FeatureManifest::resolve(MANIFEST).unwrap();
    let predictor = Predictor::new(Box::new(recorder.clone()), manifest).unwrap();
    (Estimator::new(predictor), recorder)
}

fn write_artifact(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("estimator-e2e-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn valid_submission_reaches_the_model_with_seven_columns() {
    let (estimator, recorder) = recording_estimator();

    let price = estimator.estimate(&scenario()).unwrap();
    assert_eq!(price.to_string(), "1,234.50");

    let rows = recorder.rows.lock().unwrap();
    assert_eq!(
        *rows,
        vec![vec![3.0, 90.0, 1200.0, 250.0, 5.0, 10.0, 30.0]]
    );
}

#[test]
fn invalid_submission_never_reaches_the_model() {
    let (estimator, recorder) = recording_estimator();
    let raw = RawInput {
        bedroom_count: None,
        net_area: String::new(),
        ..scenario()
    };

    let Err(EstimateError::Invalid(errors)) = estimator.estimate(&raw) else {
        panic!("expected validation errors");
    };
    assert_eq!(
        errors.messages(),
        [
            "Bedroom Count cannot be empty.",
            "Net square meters cannot be empty."
        ]
    );
    assert!(recorder.rows.lock().unwrap().is_empty());
}

#[test]
fn shipped_artifact_loads_and_predicts() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../assets/house_price_lr_fe.json");
    let estimator = Estimator::load(&EstimatorConfig::new(path)).unwrap();

    let features: Vec<_> = estimator
        .predictor()
        .manifest()
        .features()
        .iter()
        .map(|f| f.name())
        .collect();
    assert_eq!(features, MANIFEST);

    let price = estimator.estimate(&scenario()).unwrap();
    assert_eq!(price.to_string(), "267,600.00");
}

#[test]
fn clones_share_the_loaded_model() {
    let (estimator, recorder) = recording_estimator();
    let clone = estimator.clone();

    std::thread::spawn(move || clone.estimate(&scenario()).unwrap())
        .join()
        .unwrap();
    estimator.estimate(&scenario()).unwrap();

    assert_eq!(recorder.rows.lock().unwrap().len(), 2);
}

#[test]
fn missing_artifact_is_a_config_error() {
    let config = EstimatorConfig::new("does/not/exist.json");
    assert!(matches!(
        Estimator::load(&config),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn corrupt_artifact_is_a_config_error() {
    let path = write_artifact("corrupt.json", "{ \"features\": [\"age\"], ");
    assert!(matches!(
        Estimator::load(&EstimatorConfig::new(path)),
        Err(ConfigError::Corrupt { .. })
    ));
}

#[test]
fn manifest_with_unknown_feature_is_a_config_error() {
    let path = write_artifact(
        "unknown.json",
        r#"{
            "features": ["net_sqm", "balcony_sqm"],
            "model": { "linear_regression": { "coefficients": [1.0, 1.0], "intercept": 0.0 } }
        }"#,
    );

    assert!(matches!(
        Estimator::load(&EstimatorConfig::new(path)),
        Err(ConfigError::UnknownFeature(name)) if name == "balcony_sqm"
    ));
}

#[test]
fn coefficient_count_must_match_the_manifest() {
    let path = write_artifact(
        "arity.json",
        r#"{
            "features": ["net_sqm", "floor", "age"],
            "model": { "linear_regression": { "coefficients": [1.0, 1.0], "intercept": 0.0 } }
        }"#,
    );

    assert!(matches!(
        Estimator::load(&EstimatorConfig::new(path)),
        Err(ConfigError::ShapeMismatch {
            got: 2,
            expected: 3,
            ..
        })
    ));
}

#[test]
fn partial_manifest_drops_the_other_columns() {
    let path = write_artifact(
        "partial.json",
        r#"{
            "features": ["sqm_per_bedroom", "net_sqm"],
            "model": { "linear_regression": { "coefficients": [100.0, 1.0], "intercept": 0.5 } }
        }"#,
    );

    let estimator = Estimator::load(&EstimatorConfig::new(path)).unwrap();
    let price = estimator.estimate(&scenario()).unwrap();
    assert_eq!(price.value(), 30.0 * 100.0 + 90.0 + 0.5);
}
