//! HTML document shell.
//!
//! Full-page responses wrap the rendered report tree in a self-contained
//! document: inline CSS plus the htmx script the kind toggle relies on.
//! Selector refreshes are served as bare fragments and never pass through
//! here.

use crate::components::Fragment;
use crate::entity::EntityKind;
use crate::util::html_escape;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Wrap a rendered report in a complete HTML document.
pub fn render_document(kind: EntityKind, body: &Fragment) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{htmx}"></script>
</head>
<body>
    <main class="container">
        {body}
    </main>
</body>
</html>"#,
        title = html_escape(&format!("{} Report", kind.label())),
        css = inline_css(),
        htmx = HTMX_SRC,
        body = body,
    )
}

fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.5;
    color: #111827;
    background: #ffffff;
    margin: 0;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 2rem;
}

.report-header {
    font-size: 1.75rem;
    margin: 0 0 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid #e5e7eb;
}

form[data-component="filters"] {
    display: flex;
    gap: 1rem;
    align-items: center;
    margin-bottom: 1.5rem;
}

.kind-toggle {
    border: none;
    display: flex;
    gap: 0.75rem;
    padding: 0;
    margin: 0;
}

#selector {
    display: flex;
    gap: 0.5rem;
    align-items: center;
}

.grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}

.chart svg {
    width: 100%;
    height: auto;
}

table.notes {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.875rem;
}

table.notes th,
table.notes td {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid #e5e7eb;
}

table.notes th {
    background: #f9fafb;
    font-weight: 600;
}

.render-error {
    color: #6b7280;
    font-style: italic;
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_fragment() {
        let doc = render_document(EntityKind::Group, &Fragment::new("<p>body</p>"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Team Report</title>"));
        assert!(doc.contains(HTMX_SRC));
        assert!(doc.contains("<p>body</p>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
