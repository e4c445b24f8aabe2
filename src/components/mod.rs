//! Report component tree.
//!
//! A report is a tree of [`ComponentNode`]s built once at startup. Leaves
//! render straight from the request context; composites render their
//! children in order, against the same context, inside one wrapper element.
//! Nodes hold no per-request state, so one tree serves every request.
//!
//! A leaf that fails is logged and replaced by a placeholder; the rest of the
//! tree still renders.

use std::fmt;
use std::sync::Arc;

use crate::error::RenderError;
use crate::queries::EntityQuery;
use crate::util::html_escape;

mod charts;
mod filters;
mod header;
mod notes;
mod report;

pub use charts::{cumulative, fill_missing, DailyCounts, RiskChartLeaf, TimeSeriesChartLeaf};
pub use filters::{RadioLeaf, SelectorLeaf, SELECTOR_ID};
pub use header::HeaderLeaf;
pub use notes::NotesTableLeaf;
pub use report::{ReportTemplate, SELECTOR_PATH, SUBMIT_PATH};

/// Rendered HTML markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What every node renders from: the optional entity id and the query
/// object for the request's kind.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub entity_id: Option<&'a str>,
    pub query: &'a dyn EntityQuery,
}

pub trait Leaf: Send + Sync {
    /// Stable name written to `data-component`.
    fn name(&self) -> &'static str;

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError>;
}

/// Element a composite wraps its children in.
#[derive(Debug, Clone)]
pub enum Wrapper {
    Div {
        class: &'static str,
    },
    /// A form whose children are its inputs; a submit button is appended.
    Form {
        id: &'static str,
        action: &'static str,
        method: &'static str,
        submit_label: &'static str,
    },
}

#[derive(Clone)]
pub struct Composite {
    name: &'static str,
    wrapper: Wrapper,
    children: Vec<ComponentNode>,
}

impl Composite {
    pub fn new(name: &'static str, wrapper: Wrapper, children: Vec<ComponentNode>) -> Self {
        Self {
            name,
            wrapper,
            children,
        }
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Fragment {
        let inner: String = self
            .children
            .iter()
            .map(|child| child.render_ctx(ctx).into_string())
            .collect();

        let markup = match &self.wrapper {
            Wrapper::Div { class } => format!(
                r#"<div class="{}" data-component="{}">{}</div>"#,
                class, self.name, inner
            ),
            Wrapper::Form {
                id,
                action,
                method,
                submit_label,
            } => format!(
                r#"<form id="{}" action="{}" method="{}" data-component="{}">{}<button type="submit">{}</button></form>"#,
                id,
                action,
                method,
                self.name,
                inner,
                html_escape(submit_label)
            ),
        };
        Fragment(markup)
    }
}

#[derive(Clone)]
pub enum ComponentNode {
    Leaf(Arc<dyn Leaf>),
    Composite(Composite),
}

impl ComponentNode {
    pub fn leaf(leaf: impl Leaf + 'static) -> Self {
        ComponentNode::Leaf(Arc::new(leaf))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComponentNode::Leaf(leaf) => leaf.name(),
            ComponentNode::Composite(composite) => composite.name,
        }
    }

    /// Render this node and everything below it.
    pub fn render(&self, entity_id: Option<&str>, query: &dyn EntityQuery) -> Fragment {
        self.render_ctx(&RenderContext { entity_id, query })
    }

    fn render_ctx(&self, ctx: &RenderContext<'_>) -> Fragment {
        match self {
            ComponentNode::Leaf(leaf) => match leaf.render(ctx) {
                Ok(fragment) => fragment,
                Err(e) => {
                    log::warn!(
                        "{} component failed for {} {:?}: {}",
                        leaf.name(),
                        ctx.query.kind(),
                        ctx.entity_id,
                        e
                    );
                    placeholder(leaf.name())
                }
            },
            ComponentNode::Composite(composite) => composite.render(ctx),
        }
    }
}

fn placeholder(name: &str) -> Fragment {
    Fragment(format!(
        r#"<div class="render-error" data-component="{}" data-error="true">Unavailable</div>"#,
        name
    ))
}
