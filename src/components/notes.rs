use std::fmt::Write;

use crate::error::RenderError;
use crate::util::html_escape;

use super::{Fragment, Leaf, RenderContext};

/// Two-column (date, note) table, rows in storage order.
#[derive(Debug, Default)]
pub struct NotesTableLeaf;

impl Leaf for NotesTableLeaf {
    fn name(&self) -> &'static str {
        "notes"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let notes = match ctx.entity_id {
            Some(id) => ctx.query.notes(id),
            None => Vec::new(),
        };

        let mut html = String::from(
            r#"<table class="notes" data-component="notes"><thead><tr><th>Date</th><th>Note</th></tr></thead><tbody>"#,
        );
        for entry in &notes {
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td></tr>",
                entry.date,
                html_escape(&entry.note)
            );
        }
        html.push_str("</tbody></table>");
        Ok(Fragment::new(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentNode;
    use crate::db::fixtures;
    use crate::entity::EntityKind;
    use crate::queries::for_kind;

    #[test]
    fn test_notes_rows_are_escaped() {
        let query = for_kind(EntityKind::Individual, fixtures::seeded_source());
        let html = ComponentNode::leaf(NotesTableLeaf).render(Some("2"), query.as_ref());
        assert!(html
            .as_str()
            .contains("<tr><td>2024-01-05</td><td>Led the quarterly &lt;review&gt;</td></tr>"));
    }

    #[test]
    fn test_team_notes_include_every_member() {
        let query = for_kind(EntityKind::Group, fixtures::seeded_source());
        let html = ComponentNode::leaf(NotesTableLeaf).render(Some("1"), query.as_ref());
        assert_eq!(html.as_str().matches("<tr><td>").count(), 2);
    }

    #[test]
    fn test_no_id_renders_empty_body() {
        let query = for_kind(EntityKind::Group, fixtures::seeded_source());
        let html = ComponentNode::leaf(NotesTableLeaf).render(None, query.as_ref());
        assert!(html.as_str().ends_with("<tbody></tbody></table>"));
    }
}
