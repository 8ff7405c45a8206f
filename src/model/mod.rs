//! Trained price model interface.
//!
//! The request path only ever talks to [`PriceModel`]; the concrete artifact
//! shipped with the crate is the JSON tree ensemble in [`forest`].

pub mod artifact;
pub mod forest;

pub use artifact::{fingerprint, ArtifactError};
pub use forest::TreeEnsemble;

use std::error::Error;
use std::fmt;

/// A single cell of the row handed to the model.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FeatureValue::Number(_) => "number",
            FeatureValue::Text(_) => "text",
        }
    }
}

/// Named, ordered feature values for one listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRow {
    cells: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRow {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, name: &'static str, value: FeatureValue) {
        self.cells.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.cells.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        self.cells.iter().map(|(n, v)| (*n, v))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The model asked for a feature the row doesn't carry.
    MissingFeature(String),
    TypeMismatch {
        feature: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Batch in and predictions out disagree in length.
    Shape { expected: usize, actual: usize },
    NonFinite(f64),
    /// The loaded model can't be evaluated (e.g. a cycle in a tree).
    Malformed(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::MissingFeature(name) => {
                write!(f, "model expects feature '{name}' which the input lacks")
            }
            InferenceError::TypeMismatch {
                feature,
                expected,
                found,
            } => write!(f, "feature '{feature}': model expects {expected}, got {found}"),
            InferenceError::Shape { expected, actual } => {
                write!(f, "expected {expected} prediction(s), model returned {actual}")
            }
            InferenceError::NonFinite(v) => write!(f, "model produced a non-finite value ({v})"),
            InferenceError::Malformed(msg) => write!(f, "model is malformed: {msg}"),
        }
    }
}

impl Error for InferenceError {}

/// A regression model trained on log nightly price.
pub trait PriceModel: Send + Sync {
    /// One log-space prediction per row, in order.
    fn predict(&self, batch: &[FeatureRow]) -> Result<Vec<f64>, InferenceError>;
}
