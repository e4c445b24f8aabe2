//! Kind toggle and entity selector.
//!
//! Flipping the toggle asks the server for a fresh selector only
//! (`GET /selector?kind=..`) and swaps it in place, so the rest of the page
//! stays as rendered until the form is submitted.

use std::fmt::Write;

use crate::entity::EntityKind;
use crate::error::RenderError;
use crate::util::html_escape;

use super::{Fragment, Leaf, RenderContext};

/// DOM id of the element the kind toggle replaces.
pub const SELECTOR_ID: &str = "selector";

/// Dropdown of every entity of the current kind.
#[derive(Debug, Default)]
pub struct SelectorLeaf;

impl Leaf for SelectorLeaf {
    fn name(&self) -> &'static str {
        "selector"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let kind = ctx.query.kind();
        let mut html = format!(
            r#"<div id="{id}" data-component="selector" data-kind="{kind}"><label for="{id}-input">{label}</label><select id="{id}-input" name="id">"#,
            id = SELECTOR_ID,
            kind = kind.as_str(),
            label = kind.label()
        );
        for option in ctx.query.list_all() {
            let selected = if ctx.entity_id == Some(option.id.as_str()) {
                " selected"
            } else {
                ""
            };
            let _ = write!(
                html,
                r#"<option value="{}"{}>{}</option>"#,
                html_escape(&option.id),
                selected,
                html_escape(&option.name)
            );
        }
        html.push_str("</select></div>");
        Ok(Fragment::new(html))
    }
}

/// Two-valued Employee/Team toggle wired to the selector refresh.
#[derive(Debug)]
pub struct RadioLeaf {
    refresh_path: &'static str,
}

impl RadioLeaf {
    pub fn new(refresh_path: &'static str) -> Self {
        Self { refresh_path }
    }
}

impl Leaf for RadioLeaf {
    fn name(&self) -> &'static str {
        "kind-toggle"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let current = ctx.query.kind();
        let mut html = String::from(r#"<fieldset class="kind-toggle" data-component="kind-toggle">"#);
        for kind in EntityKind::ALL {
            let checked = if kind == current { " checked" } else { "" };
            let _ = write!(
                html,
                r##"<label><input type="radio" name="kind" value="{value}" hx-get="{path}" hx-target="#{target}" hx-swap="outerHTML"{checked}>{label}</label>"##,
                value = kind.as_str(),
                path = self.refresh_path,
                target = SELECTOR_ID,
                checked = checked,
                label = kind.label()
            );
        }
        html.push_str("</fieldset>");
        Ok(Fragment::new(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentNode;
    use crate::db::fixtures;
    use crate::queries::for_kind;

    #[test]
    fn test_selector_lists_every_entity() {
        let query = for_kind(EntityKind::Individual, fixtures::seeded_source());
        let html = ComponentNode::leaf(SelectorLeaf).render(None, query.as_ref());
        let html = html.as_str();
        assert!(html.contains(r#"<option value="2">Ada Lovelace</option>"#));
        assert!(html.contains(r#"<option value="3">Grace Hopper</option>"#));
        assert!(html.contains(r#"<option value="4">Alan Turing</option>"#));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_selector_marks_current_id() {
        let query = for_kind(EntityKind::Group, fixtures::seeded_source());
        let html = ComponentNode::leaf(SelectorLeaf).render(Some("2"), query.as_ref());
        assert!(html
            .as_str()
            .contains(r#"<option value="2" selected>Platform</option>"#));
        assert!(html
            .as_str()
            .contains(r#"<option value="1">Analytics</option>"#));
    }

    #[test]
    fn test_selector_on_storage_outage_is_empty_select() {
        let query = for_kind(EntityKind::Group, fixtures::unavailable_source());
        let html = ComponentNode::leaf(SelectorLeaf).render(None, query.as_ref());
        assert!(html.as_str().contains(r#"name="id"></select></div>"#));
    }

    #[test]
    fn test_radio_checks_current_kind_and_targets_selector() {
        let query = for_kind(EntityKind::Group, fixtures::unavailable_source());
        let html = ComponentNode::leaf(RadioLeaf::new("/selector")).render(None, query.as_ref());
        let html = html.as_str();
        assert!(html.contains(
            r##"value="group" hx-get="/selector" hx-target="#selector" hx-swap="outerHTML" checked>"##
        ));
        assert!(html.contains(
            r##"value="individual" hx-get="/selector" hx-target="#selector" hx-swap="outerHTML">"##
        ));
    }
}
