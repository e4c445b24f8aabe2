//! Shared type definitions for the database layer.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Errors specific to database operations.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database file not found: {0}")]
    NotFound(std::path::PathBuf),
}

/// One day of summed event counts for an entity.
///
/// Counts are `None` when every underlying row held NULL for that column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSeriesPoint {
    pub date: NaiveDate,
    pub positive_events: Option<i64>,
    pub negative_events: Option<i64>,
}

/// A dated free-text note attached to an employee or team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEntry {
    pub date: NaiveDate,
    pub note: String,
}

/// A `(display name, id)` pair for the entity selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOption {
    pub name: String,
    pub id: String,
}

/// Column-named numeric table, the input shape of the risk classifier.
///
/// NULL cells are read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
