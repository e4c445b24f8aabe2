//! Kind-agnostic report queries.
//!
//! `EntityQuery` is the one interface every report component talks to.
//! `EmployeeQuery` and `TeamQuery` are the only places that know how their
//! schema joins events and notes; `for_kind` picks between them from an
//! explicit `EntityKind`.
//!
//! Queries fail soft: a storage error is logged and surfaces as an empty
//! result, and an id that matches nothing renders as an empty section.

use rusqlite::Row;

use crate::db::{DbError, DbSource, EntityOption, EventSeriesPoint, FeatureTable, NoteEntry};
use crate::entity::EntityKind;

mod employee;
mod team;

pub use employee::EmployeeQuery;
pub use team::TeamQuery;

/// Column names of the feature table handed to the risk classifier.
pub const FEATURE_COLUMNS: [&str; 2] = ["positive_events", "negative_events"];

pub trait EntityQuery: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Table holding this kind's rows (`employee` / `team`).
    fn table_name(&self) -> &'static str;

    /// Join key shared with `employee_events` and `notes`.
    fn id_column(&self) -> &'static str;

    fn source(&self) -> &DbSource;

    /// Every entity of this kind as `(display name, id)`.
    fn list_all(&self) -> Vec<EntityOption>;

    /// Display name for `id`, or an empty string when the id is unknown.
    fn display_name(&self, id: &str) -> String;

    /// Summed positive/negative counts used as classifier input.
    ///
    /// Individual: one row for the employee. Group: one row per member.
    fn feature_vector(&self, id: &str) -> FeatureTable;

    /// Per-day summed event counts, ascending by date. Dates without events
    /// are not synthesized.
    fn event_series(&self, id: &str) -> Vec<EventSeriesPoint> {
        let Some(id) = parse_id(id) else {
            return Vec::new();
        };
        let sql = format!(
            "SELECT event_date,
                    SUM(positive_events) AS positive_events,
                    SUM(negative_events) AS negative_events
             FROM employee_events
             WHERE {} = ?1
             GROUP BY event_date
             ORDER BY event_date",
            self.id_column()
        );
        let result = self.source().open().and_then(|db| {
            db.query_rows(&sql, rusqlite::params![id], |row| {
                Ok(EventSeriesPoint {
                    date: row.get(0)?,
                    positive_events: row.get(1)?,
                    negative_events: row.get(2)?,
                })
            })
        });
        soft(self.kind(), "event_series", result)
    }

    /// Notes attached to `id`, in storage order.
    fn notes(&self, id: &str) -> Vec<NoteEntry> {
        let Some(id) = parse_id(id) else {
            return Vec::new();
        };
        let sql = format!(
            "SELECT note_date, note FROM notes WHERE {} = ?1",
            self.id_column()
        );
        let result = self.source().open().and_then(|db| {
            db.query_rows(&sql, rusqlite::params![id], |row| {
                Ok(NoteEntry {
                    date: row.get(0)?,
                    note: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                })
            })
        });
        soft(self.kind(), "notes", result)
    }
}

/// Build the query implementation for `kind`.
pub fn for_kind(kind: EntityKind, source: DbSource) -> Box<dyn EntityQuery> {
    match kind {
        EntityKind::Individual => Box::new(EmployeeQuery::new(source)),
        EntityKind::Group => Box::new(TeamQuery::new(source)),
    }
}

/// Entity ids are integer keys. Anything else cannot match a row.
pub(crate) fn parse_id(id: &str) -> Option<i64> {
    id.trim().parse().ok()
}

/// Collapse a storage failure into an empty result.
pub(crate) fn soft<T: Default>(kind: EntityKind, op: &str, result: Result<T, DbError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{} {} query failed, rendering empty: {}", kind, op, e);
            T::default()
        }
    }
}

pub(crate) fn entity_option(row: &Row<'_>) -> rusqlite::Result<EntityOption> {
    let name: Option<String> = row.get(0)?;
    let id: i64 = row.get(1)?;
    Ok(EntityOption {
        name: name.unwrap_or_default(),
        id: id.to_string(),
    })
}
