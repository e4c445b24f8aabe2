//! Collapse classifier output into one risk number per report subject.

use std::sync::Arc;

use crate::classifier::{Classifier, ClassifierError};
use crate::db::FeatureTable;
use crate::entity::EntityKind;

/// Wraps the shared classifier handle.
#[derive(Clone)]
pub struct RiskFeatureAdapter {
    classifier: Arc<dyn Classifier>,
}

impl RiskFeatureAdapter {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Risk in `[0, 1]`, or `None` when there is nothing to score.
    ///
    /// The classifier runs once over the whole table. An employee's score is
    /// its single row's probability; a team's is the mean over its members'
    /// rows.
    pub fn score(
        &self,
        kind: EntityKind,
        table: &FeatureTable,
    ) -> Result<Option<f64>, ClassifierError> {
        if table.is_empty() {
            return Ok(None);
        }
        log::debug!("Scoring {} {} feature row(s)", table.len(), kind);
        let probs = self.classifier.predict_proba(table)?;
        if probs.is_empty() {
            return Ok(None);
        }

        let raw = match kind {
            EntityKind::Individual => probs[0],
            EntityKind::Group => probs.iter().sum::<f64>() / probs.len() as f64,
        };

        if raw.is_nan() {
            log::warn!("Classifier returned NaN for {} risk", kind);
            return Ok(None);
        }
        Ok(Some(raw.clamp(0.0, 1.0)))
    }
}
