use crate::db::{DbSource, EntityOption, FeatureTable};
use crate::entity::EntityKind;

use super::{entity_option, parse_id, soft, EntityQuery, FEATURE_COLUMNS};

/// Queries for a team, keyed by `team_id`.
#[derive(Debug, Clone)]
pub struct TeamQuery {
    source: DbSource,
}

impl TeamQuery {
    pub fn new(source: DbSource) -> Self {
        Self { source }
    }
}

impl EntityQuery for TeamQuery {
    fn kind(&self) -> EntityKind {
        EntityKind::Group
    }

    fn table_name(&self) -> &'static str {
        "team"
    }

    fn id_column(&self) -> &'static str {
        "team_id"
    }

    fn source(&self) -> &DbSource {
        &self.source
    }

    fn list_all(&self) -> Vec<EntityOption> {
        let result = self.source.open().and_then(|db| {
            db.query_rows(
                "SELECT team_name, team_id FROM team ORDER BY team_id",
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
                "SELECT team_name FROM team WHERE team_id = ?1",
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

    /// One row per member employee. The risk chart averages the per-member
    /// probabilities; nothing is aggregated here.
    fn feature_vector(&self, id: &str) -> FeatureTable {
        let Some(id) = parse_id(id) else {
            return FeatureTable::new(FEATURE_COLUMNS.map(String::from).to_vec());
        };
        let result = self.source.open().and_then(|db| {
            db.query_table(
                "SELECT positive_events, negative_events FROM (
                    SELECT employee_id,
                           SUM(positive_events) AS positive_events,
                           SUM(negative_events) AS negative_events
                    FROM team
                    JOIN employee_events USING (team_id)
                    WHERE team.team_id = ?1
                    GROUP BY employee_id
                    ORDER BY employee_id
                 )",
                rusqlite::params![id],
            )
        });
        soft(self.kind(), "feature_vector", result)
    }
}
