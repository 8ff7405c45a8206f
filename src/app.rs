// src/app.rs
//
// Process-wide state: the artifacts loaded at startup and the clock. Shared
// read-only by every server worker.

use crate::config::{AppConfig, DEFAULT_STATIC_DIR};
use crate::domain::{parse_listing_form, Clock, DateError, ListingRecord, ValidationError};
use crate::encoder::OneHotEncoder;
use crate::inference::{error_message, predict_price, price_message};
use crate::model::{ArtifactError, InferenceError, PriceModel, TreeEnsemble};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Anything that can go wrong between a form submission and a price.
#[derive(Debug)]
pub enum PredictError {
    Validation(ValidationError),
    Date(DateError),
    Inference(InferenceError),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Validation(e) => write!(f, "{e}"),
            PredictError::Date(e) => write!(f, "{e}"),
            PredictError::Inference(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PredictError {}

impl From<ValidationError> for PredictError {
    fn from(e: ValidationError) -> Self {
        PredictError::Validation(e)
    }
}

impl From<DateError> for PredictError {
    fn from(e: DateError) -> Self {
        PredictError::Date(e)
    }
}

impl From<InferenceError> for PredictError {
    fn from(e: InferenceError) -> Self {
        PredictError::Inference(e)
    }
}

/// What the result panel shows for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub message: String,
    pub succeeded: bool,
    /// Categorical inputs the encoder never saw while fitting.
    pub notes: Vec<String>,
}

pub struct App {
    model: Box<dyn PriceModel>,
    clock: Box<dyn Clock>,
    encoder: Option<OneHotEncoder>,
    static_dir: PathBuf,
    pub model_sha256: Option<String>,
    pub encoder_sha256: Option<String>,
}

impl App {
    pub fn new(model: Box<dyn PriceModel>, clock: Box<dyn Clock>) -> Self {
        Self {
            model,
            clock,
            encoder: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            model_sha256: None,
            encoder_sha256: None,
        }
    }

    pub fn with_encoder(mut self, encoder: OneHotEncoder, sha256: Option<String>) -> Self {
        self.encoder = Some(encoder);
        self.encoder_sha256 = sha256;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Loads the configured artifacts. Any failure here is fatal for the server.
    pub fn load(cfg: &AppConfig, clock: Box<dyn Clock>) -> Result<Self, ArtifactError> {
        let (model, model_sha) = TreeEnsemble::load(&cfg.model_path)?;
        info!(
            path = %cfg.model_path.display(),
            sha256 = %model_sha,
            trees = model.trees.len(),
            "loaded price model"
        );

        let mut app = App::new(Box::new(model), clock).with_static_dir(cfg.static_dir.clone());
        app.model_sha256 = Some(model_sha);

        if let Some(path) = &cfg.encoder_path {
            let (encoder, sha) = OneHotEncoder::load(path)?;
            info!(
                path = %path.display(),
                sha256 = %sha,
                width = encoder.width(),
                "loaded categorical encoder"
            );
            app = app.with_encoder(encoder, Some(sha));
        }

        Ok(app)
    }

    fn try_predict(&self, body: &[u8]) -> Result<(ListingRecord, f64), PredictError> {
        let form = parse_listing_form(body)?;
        let record = form.into_record(self.clock.today())?;
        let price = predict_price(self.model.as_ref(), &record)?;
        Ok((record, price))
    }

    /// The single entry point for a form submission. Never fails: every error
    /// becomes the displayed message.
    pub fn predict_form(&self, body: &[u8]) -> PredictionView {
        match self.try_predict(body) {
            Ok((record, price)) => {
                info!(
                    price,
                    host_duration = record.host_duration,
                    review_period = record.review_period,
                    "prediction served"
                );
                PredictionView {
                    message: price_message(price),
                    succeeded: true,
                    notes: self.unseen_categories(&record),
                }
            }
            Err(err) => {
                warn!(error = %err, "prediction failed");
                PredictionView {
                    message: error_message(&err),
                    succeeded: false,
                    notes: Vec::new(),
                }
            }
        }
    }

    fn unseen_categories(&self, record: &ListingRecord) -> Vec<String> {
        let Some(encoder) = &self.encoder else {
            return Vec::new();
        };

        record
            .nominal_values()
            .iter()
            .filter(|(column, value)| !encoder.is_known(column, value))
            .map(|(column, value)| {
                format!("{column} '{value}' was not in the training data; it encodes as all zeros")
            })
            .collect()
    }
}
