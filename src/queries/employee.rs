use crate::db::{DbSource, EntityOption, FeatureTable};
use crate::entity::EntityKind;

use super::{entity_option, parse_id, soft, EntityQuery, FEATURE_COLUMNS};

/// Queries for a single employee, keyed by `employee_id`.
#[derive(Debug, Clone)]
pub struct EmployeeQuery {
    source: DbSource,
}

impl EmployeeQuery {
    pub fn new(source: DbSource) -> Self {
        Self { source }
    }
}

impl EntityQuery for EmployeeQuery {
    fn kind(&self) -> EntityKind {
        EntityKind::Individual
    }

    fn table_name(&self) -> &'static str {
        "employee"
    }

    fn id_column(&self) -> &'static str {
        "employee_id"
    }

    fn source(&self) -> &DbSource {
        &self.source
    }

    fn list_all(&self) -> Vec<EntityOption> {
        let result = self.source.open().and_then(|db| {
            db.query_rows(
                "SELECT first_name || ' ' || last_name AS full_name, employee_id
                 FROM employee
                 ORDER BY employee_id",
                [],
                entity_option,
            )
        });
        soft(self.kind(), "list_all", result)
    }

    fn display_name(&self, id: &str) -> String {
        let Some(id) = parse_id(id) else {
            return String::new();
        };
        let result = self.source.open().and_then(|db| {
            db.query_rows(
                "SELECT first_name || ' ' || last_name AS full_name
                 FROM employee
                 WHERE employee_id = ?1",
                rusqlite::params![id],
                |row| row.get::<_, Option<String>>(0),
            )
        });
        soft(self.kind(), "display_name", result)
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_default()
    }

    fn feature_vector(&self, id: &str) -> FeatureTable {
        let Some(id) = parse_id(id) else {
            return FeatureTable::new(FEATURE_COLUMNS.map(String::from).to_vec());
        };
        // LEFT JOIN keeps one row for a known employee without events; its
        // NULL sums read back as 0.
        let result = self.source.open().and_then(|db| {
            db.query_table(
                "SELECT SUM(positive_events) AS positive_events,
                        SUM(negative_events) AS negative_events
                 FROM employee
                 LEFT JOIN employee_events USING (employee_id)
                 WHERE employee.employee_id = ?1
                 GROUP BY employee.employee_id",
                rusqlite::params![id],
            )
        });
        soft(self.kind(), "feature_vector", result)
    }
}
