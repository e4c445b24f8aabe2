use std::sync::Arc;

use crate::classifier::Classifier;
use crate::queries::EntityQuery;
use crate::risk::RiskFeatureAdapter;

use super::{
    Composite, ComponentNode, Fragment, HeaderLeaf, NotesTableLeaf, RadioLeaf, RiskChartLeaf,
    SelectorLeaf, TimeSeriesChartLeaf, Wrapper,
};

pub const SELECTOR_PATH: &str = "/selector";
pub const SUBMIT_PATH: &str = "/select";

/// The report's fixed component tree.
///
/// Header, then the filter form (kind toggle + selector), then the two
/// charts side by side, then the notes table. The selector node is kept
/// separately so it can be re-rendered on its own; it is the same leaf the
/// tree holds.
#[derive(Clone)]
pub struct ReportTemplate {
    root: ComponentNode,
    selector: ComponentNode,
}

impl ReportTemplate {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        let selector = ComponentNode::leaf(SelectorLeaf);

        let filters = ComponentNode::Composite(Composite::new(
            "filters",
            Wrapper::Form {
                id: "top-filters",
                action: SUBMIT_PATH,
                method: "post",
                submit_label: "View report",
            },
            vec![
                ComponentNode::leaf(RadioLeaf::new(SELECTOR_PATH)),
                selector.clone(),
            ],
        ));

        let visualizations = ComponentNode::Composite(Composite::new(
            "visualizations",
            Wrapper::Div { class: "grid" },
            vec![
                ComponentNode::leaf(TimeSeriesChartLeaf),
                ComponentNode::leaf(RiskChartLeaf::new(RiskFeatureAdapter::new(classifier))),
            ],
        ));

        let root = ComponentNode::Composite(Composite::new(
            "report",
            Wrapper::Div { class: "report" },
            vec![
                ComponentNode::leaf(HeaderLeaf),
                filters,
                visualizations,
                ComponentNode::leaf(NotesTableLeaf),
            ],
        ));

        Self { root, selector }
    }

    pub fn render(&self, entity_id: Option<&str>, query: &dyn EntityQuery) -> Fragment {
        self.root.render(entity_id, query)
    }

    /// Render the selector alone, with no entity selected.
    pub fn render_selector(&self, query: &dyn EntityQuery) -> Fragment {
        self.selector.render(None, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LogisticModel;
    use crate::db::fixtures;
    use crate::entity::EntityKind;
    use crate::queries::for_kind;

    fn template() -> ReportTemplate {
        let model = LogisticModel::new(
            vec!["positive_events".to_string(), "negative_events".to_string()],
            vec![-0.1, 0.2],
            -0.5,
        )
        .expect("model");
        ReportTemplate::new(Arc::new(model))
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle} missing from output"))
    }

    #[test]
    fn test_tree_order() {
        let query = for_kind(EntityKind::Individual, fixtures::seeded_source());
        let html = template().render(Some("2"), query.as_ref()).into_string();
        let header = position(&html, r#"data-component="header""#);
        let form = position(&html, r#"<form id="top-filters" action="/select" method="post""#);
        let toggle = position(&html, r#"data-component="kind-toggle""#);
        let selector = position(&html, r#"data-component="selector""#);
        let grid = position(&html, r#"<div class="grid" data-component="visualizations">"#);
        let timeline = position(&html, r#"data-component="event-chart""#);
        let risk = position(&html, r#"data-component="risk-chart""#);
        let notes = position(&html, r#"data-component="notes""#);
        assert!(header < form && form < toggle && toggle < selector);
        assert!(selector < grid && grid < timeline && timeline < risk && risk < notes);
        assert!(html.starts_with(r#"<div class="report" data-component="report">"#));
    }

    #[test]
    fn test_render_selector_is_selector_only() {
        let query = for_kind(EntityKind::Group, fixtures::seeded_source());
        let html = template().render_selector(query.as_ref()).into_string();
        assert!(html.starts_with(r#"<div id="selector""#));
        assert!(html.contains(r#"<option value="1">Analytics</option>"#));
        for other in ["header", "kind-toggle", "event-chart", "risk-chart", "notes"] {
            assert!(!html.contains(&format!(r#"data-component="{other}""#)));
        }
    }
}
