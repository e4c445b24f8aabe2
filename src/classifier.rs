//! Recruitment-risk classifier.
//!
//! The model is trained elsewhere and shipped as a JSON artifact holding a
//! logistic regression: one coefficient per named feature column plus an
//! intercept. It is loaded once at startup and never mutated afterwards, so a
//! single `Arc<dyn Classifier>` can be read from every render thread without
//! locking.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::FeatureTable;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Model artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),

    #[error("Feature mismatch: model expects {expected:?}, table has {actual:?}")]
    InputMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// Binary classifier returning the positive-class probability per row.
///
/// Implementations must be safe for concurrent read-only calls.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, table: &FeatureTable) -> Result<Vec<f64>, ClassifierError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticModel {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ClassifierError> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    /// Load and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::NotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let model: LogisticModel = serde_json::from_str(&data)?;
        model.validate()?;
        log::info!(
            "Loaded risk model from {} ({} features)",
            path.display(),
            model.feature_names.len()
        );
        Ok(model)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn validate(&self) -> Result<(), ClassifierError> {
        if self.feature_names.is_empty() {
            return Err(ClassifierError::Invalid("no features".to_string()));
        }
        if self.feature_names.len() != self.coefficients.len() {
            return Err(ClassifierError::Invalid(format!(
                "{} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ClassifierError::Invalid(
                "non-finite coefficient".to_string(),
            ));
        }
        Ok(())
    }

    fn mismatch(&self, table: &FeatureTable) -> ClassifierError {
        ClassifierError::InputMismatch {
            expected: self.feature_names.clone(),
            actual: table.columns.clone(),
        }
    }
}

impl Classifier for LogisticModel {
    fn predict_proba(&self, table: &FeatureTable) -> Result<Vec<f64>, ClassifierError> {
        if table.columns != self.feature_names {
            return Err(self.mismatch(table));
        }
        table
            .rows
            .iter()
            .map(|row| {
                if row.len() != self.coefficients.len() {
                    return Err(self.mismatch(table));
                }
                let z = self.intercept
                    + row
                        .iter()
                        .zip(&self.coefficients)
                        .map(|(x, w)| x * w)
                        .sum::<f64>();
                Ok(sigmoid(z))
            })
            .collect()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
