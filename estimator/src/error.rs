use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// Fatal startup failures: the model artifact or its manifest cannot be used.
///
/// None of these are recoverable at request time, the estimator must not serve
/// predictions once one of them has been raised.
#[derive(Debug)]
pub enum ConfigError {
    /// The artifact could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The artifact was read but is not a valid model bundle.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The manifest names a feature the assembler cannot produce.
    UnknownFeature(String),
    /// The manifest names the same feature twice.
    DuplicateFeature(String),
    /// The manifest is empty.
    EmptyManifest,
    /// The model arity and the manifest length disagree.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read model artifact '{}': {source}", path.display())
            }
            Self::Corrupt { path, source } => {
                write!(f, "corrupt model artifact '{}': {source}", path.display())
            }
            Self::UnknownFeature(name) => {
                write!(f, "manifest requests unknown feature '{name}'")
            }
            Self::DuplicateFeature(name) => {
                write!(f, "manifest lists feature '{name}' more than once")
            }
            Self::EmptyManifest => write!(f, "manifest does not list any feature"),
            Self::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Failures of a single inference call.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The row handed to the model has the wrong number of columns.
    ShapeMismatch { got: usize, expected: usize },
    /// The model returned no value for the row.
    EmptyOutput,
    /// The model returned `NaN` or an infinity.
    NonFinite(f64),
}

impl Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { got, expected } => write!(
                f,
                "feature row has {got} columns, the model expects {expected}"
            ),
            Self::EmptyOutput => write!(f, "the model returned no prediction"),
            Self::NonFinite(v) => write!(f, "the model returned a non-finite prediction ({v})"),
        }
    }
}

impl Error for PredictError {}

/// The user-recoverable outcome of validation: one message per offending field.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    /// Wraps the collected messages, returns `None` when there are none.
    pub fn new(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Keeps the failed checks, in order. Callers guarantee at least one failed.
    pub(crate) fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            messages: checks.into_iter().flatten().collect(),
        }
    }

    /// The messages, in form order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join("\n"))
    }
}

impl Error for ValidationErrors {}

/// Everything that can stop a single estimate.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// The submission did not pass validation; the model was not invoked.
    Invalid(ValidationErrors),
    /// The model was invoked but its output is unusable.
    Predict(PredictError),
}

impl Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid input: {e}"),
            Self::Predict(e) => write!(f, "prediction failed: {e}"),
        }
    }
}

impl Error for EstimateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Predict(e) => Some(e),
        }
    }
}

impl From<ValidationErrors> for EstimateError {
    fn from(value: ValidationErrors) -> Self {
        Self::Invalid(value)
    }
}

impl From<PredictError> for EstimateError {
    fn from(value: PredictError) -> Self {
        Self::Predict(value)
    }
}
