use crate::error::RenderError;
use crate::util::html_escape;

use super::{Fragment, Leaf, RenderContext};

/// Page title: the entity's display name, or the kind's label when no
/// entity is selected. An unknown id renders an empty title.
#[derive(Debug, Default)]
pub struct HeaderLeaf;

impl Leaf for HeaderLeaf {
    fn name(&self) -> &'static str {
        "header"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let title = match ctx.entity_id {
            Some(id) => ctx.query.display_name(id),
            None => ctx.query.kind().label().to_string(),
        };
        Ok(Fragment::new(format!(
            r#"<h1 class="report-header" data-component="header">{}</h1>"#,
            html_escape(&title)
        )))
    }
}
