//! Report subject kinds.
//!
//! Individual = one employee, Group = one team. The kind is chosen per
//! request and selects which `EntityQuery` implementation answers the
//! report's queries.

use serde::{Deserialize, Serialize};

/// The kind of entity a report is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[serde(alias = "employee", alias = "Employee", alias = "Individual")]
    Individual,
    #[serde(alias = "team", alias = "Team", alias = "Group")]
    Group,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Individual, EntityKind::Group];

    /// Slug used in routes and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Individual => "individual",
            EntityKind::Group => "group",
        }
    }

    /// Human-readable label shown in headers and the kind toggle.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Individual => "Employee",
            EntityKind::Group => "Team",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
