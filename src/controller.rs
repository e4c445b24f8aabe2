//! Report page selection flow.
//!
//! Three independent, stateless operations:
//! - full page for an (optional) entity of a kind
//! - selector-only refresh when the kind toggle changes
//! - form submission mapped to the canonical report route

use std::sync::Arc;

use crate::components::{Fragment, ReportTemplate};
use crate::db::DbSource;
use crate::entity::EntityKind;
use crate::queries::for_kind;
use crate::util::path_from_segments;

/// Where the client should navigate after submitting the filter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInstruction {
    pub location: String,
}

impl RedirectInstruction {
    /// Canonical report route for `(kind, id)`. A blank id (an empty
    /// selector) goes to the kind's report with nothing selected.
    pub fn to_report(kind: EntityKind, id: &str) -> Self {
        let id = id.trim();
        let mut segments = vec!["report", kind.as_str()];
        if !id.is_empty() {
            segments.push(id);
        }
        let location =
            path_from_segments(&segments).unwrap_or_else(|| format!("/report/{}", kind.as_str()));
        Self { location }
    }
}

pub struct SelectionController {
    template: Arc<ReportTemplate>,
    source: DbSource,
}

impl SelectionController {
    pub fn new(template: Arc<ReportTemplate>, source: DbSource) -> Self {
        Self { template, source }
    }

    /// Render the whole report tree with a fresh query object for `kind`.
    pub fn render_full_page(&self, entity_id: Option<&str>, kind: EntityKind) -> Fragment {
        log::debug!("Rendering {} report for {:?}", kind, entity_id);
        let query = for_kind(kind, self.source.clone());
        self.template.render(entity_id, query.as_ref())
    }

    /// Render only the selector for `kind`, with nothing selected.
    pub fn rerender_selector(&self, kind: EntityKind) -> Fragment {
        log::debug!("Rendering {} selector", kind);
        let query = for_kind(kind, self.source.clone());
        self.template.render_selector(query.as_ref())
    }

    /// Map a submitted `(kind, id)` to its report route. Renders nothing.
    pub fn resolve_submission(&self, kind: EntityKind, selected_id: &str) -> RedirectInstruction {
        RedirectInstruction::to_report(kind, selected_id)
    }
}
