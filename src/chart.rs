//! Inline SVG charts.
//!
//! Both chart kinds share one neutral axis style so they sit side by side in
//! the report grid. Every plotted value is also written as a `data-*`
//! attribute, which keeps the output inspectable without parsing geometry.

use std::fmt::Write;

use crate::util::{format_number, html_escape};

const AXIS_COLOR: &str = "#6b7280";
const FONT_COLOR: &str = "#374151";
const FONT_FAMILY: &str = "system-ui, sans-serif";

const LINE_WIDTH: f64 = 640.0;
const LINE_HEIGHT: f64 = 320.0;
const BAR_WIDTH: f64 = 640.0;
const BAR_HEIGHT: f64 = 160.0;
const PAD: f64 = 48.0;

/// One named line on a [`LineChart`]. `values` align with the chart's
/// categories.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl LineChart {
    pub fn to_svg(&self) -> String {
        let mut svg = open_svg("line-chart", LINE_WIDTH, LINE_HEIGHT);
        push_title(&mut svg, &self.title, LINE_WIDTH);
        push_axes(&mut svg, LINE_WIDTH, LINE_HEIGHT);
        push_axis_labels(&mut svg, &self.x_label, &self.y_label);

        if self.categories.is_empty() {
            push_no_data(&mut svg, LINE_WIDTH, LINE_HEIGHT);
            svg.push_str("</svg>");
            return svg;
        }

        let (min, max) = self.value_range();
        let plot_w = LINE_WIDTH - 2.0 * PAD;
        let plot_h = LINE_HEIGHT - 2.0 * PAD;
        let n = self.categories.len();
        let x_at = |i: usize| {
            if n == 1 {
                PAD + plot_w / 2.0
            } else {
                PAD + plot_w * i as f64 / (n - 1) as f64
            }
        };
        let y_at = |v: f64| LINE_HEIGHT - PAD - plot_h * (v - min) / (max - min);

        for (i, category) in self.categories.iter().enumerate() {
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="9" text-anchor="middle" fill="{}">{}</text>"#,
                x_at(i),
                LINE_HEIGHT - PAD + 14.0,
                FONT_COLOR,
                html_escape(category)
            );
        }

        for series in &self.series {
            let name = html_escape(&series.name);
            let points: Vec<String> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", x_at(i), y_at(*v)))
                .collect();
            let _ = write!(
                svg,
                r#"<polyline data-series="{}" points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                name,
                points.join(" "),
                series.color
            );
            for (i, v) in series.values.iter().enumerate() {
                let category = self.categories.get(i).map(String::as_str).unwrap_or("");
                let _ = write!(
                    svg,
                    r#"<circle data-series="{}" data-x="{}" data-y="{}" cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
                    name,
                    html_escape(category),
                    format_number(*v),
                    x_at(i),
                    y_at(*v),
                    series.color
                );
            }
        }

        push_legend(&mut svg, &self.series);
        svg.push_str("</svg>");
        svg
    }

    fn value_range(&self) -> (f64, f64) {
        let mut min = 0.0_f64;
        let mut max = 1.0_f64;
        for v in self.series.iter().flat_map(|s| s.values.iter()) {
            min = min.min(*v);
            max = max.max(*v);
        }
        (min, max)
    }
}

/// A single horizontal bar on a fixed `[0, 1]` axis.
#[derive(Debug, Clone)]
pub struct HorizontalBar {
    pub title: String,
    pub value: Option<f64>,
}

impl HorizontalBar {
    pub fn to_svg(&self) -> String {
        let mut svg = open_svg("bar-chart", BAR_WIDTH, BAR_HEIGHT);
        push_title(&mut svg, &self.title, BAR_WIDTH);
        push_axes(&mut svg, BAR_WIDTH, BAR_HEIGHT);

        let plot_w = BAR_WIDTH - 2.0 * PAD;
        for tick in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let _ = write!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" font-size="9" text-anchor="middle" fill="{}">{}</text>"#,
                PAD + plot_w * tick,
                BAR_HEIGHT - PAD + 14.0,
                FONT_COLOR,
                tick
            );
        }

        match self.value {
            Some(value) => {
                let value = value.clamp(0.0, 1.0);
                let _ = write!(
                    svg,
                    r##"<rect data-value="{:.4}" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="#2563eb"/>"##,
                    value,
                    PAD,
                    PAD + 8.0,
                    plot_w * value,
                    BAR_HEIGHT - 2.0 * PAD - 16.0
                );
            }
            None => push_no_data(&mut svg, BAR_WIDTH, BAR_HEIGHT),
        }

        svg.push_str("</svg>");
        svg
    }
}

fn open_svg(class: &str, width: f64, height: f64) -> String {
    format!(
        r#"<svg class="{}" viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" font-family="{}">"#,
        class, width, height, FONT_FAMILY
    )
}

fn push_title(svg: &mut String, title: &str, width: f64) {
    let _ = write!(
        svg,
        r#"<text class="chart-title" x="{:.1}" y="24" font-size="16" text-anchor="middle" fill="{}">{}</text>"#,
        width / 2.0,
        FONT_COLOR,
        html_escape(title)
    );
}

fn push_axes(svg: &mut String, width: f64, height: f64) {
    let _ = write!(
        svg,
        r#"<line x1="{p}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="{c}"/><line x1="{p}" y1="{p}" x2="{p}" y2="{b:.1}" stroke="{c}"/>"#,
        p = PAD,
        b = height - PAD,
        r = width - PAD,
        c = AXIS_COLOR
    );
}

fn push_axis_labels(svg: &mut String, x_label: &str, y_label: &str) {
    let _ = write!(
        svg,
        r#"<text class="x-label" x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle" fill="{}">{}</text>"#,
        LINE_WIDTH / 2.0,
        LINE_HEIGHT - 8.0,
        FONT_COLOR,
        html_escape(x_label)
    );
    let _ = write!(
        svg,
        r#"<text class="y-label" x="14" y="{:.1}" font-size="11" text-anchor="middle" fill="{}" transform="rotate(-90 14 {:.1})">{}</text>"#,
        LINE_HEIGHT / 2.0,
        FONT_COLOR,
        LINE_HEIGHT / 2.0,
        html_escape(y_label)
    );
}

fn push_legend(svg: &mut String, series: &[Series]) {
    for (i, s) in series.iter().enumerate() {
        let y = PAD + 14.0 * i as f64;
        let _ = write!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="10" height="10" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="10" fill="{}">{}</text>"#,
            LINE_WIDTH - PAD - 90.0,
            y,
            s.color,
            LINE_WIDTH - PAD - 76.0,
            y + 9.0,
            FONT_COLOR,
            html_escape(&s.name)
        );
    }
}

fn push_no_data(svg: &mut String, width: f64, height: f64) {
    let _ = write!(
        svg,
        r#"<text class="no-data" x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="{}">No data</text>"#,
        width / 2.0,
        height / 2.0,
        AXIS_COLOR
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_chart_writes_points_as_data() {
        let chart = LineChart {
            title: "Events".to_string(),
            x_label: "Date".to_string(),
            y_label: "Count".to_string(),
            categories: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            series: vec![Series {
                name: "Positive".to_string(),
                color: "#16a34a",
                values: vec![3.0, 5.0],
            }],
        };
        let svg = chart.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"data-series="Positive" data-x="2024-01-01" data-y="3""#));
        assert!(svg.contains(r#"data-series="Positive" data-x="2024-01-02" data-y="5""#));
        assert!(svg.contains(">Date<"));
        assert!(!svg.contains("No data"));
    }

    #[test]
    fn test_empty_line_chart_is_neutral() {
        let chart = LineChart {
            title: "Events".to_string(),
            x_label: "Date".to_string(),
            y_label: "Count".to_string(),
            categories: Vec::new(),
            series: Vec::new(),
        };
        let svg = chart.to_svg();
        assert!(svg.contains("No data"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_bar_clamps_and_handles_sentinel() {
        let bar = HorizontalBar {
            title: "Risk".to_string(),
            value: Some(0.25),
        };
        assert!(bar.to_svg().contains(r#"data-value="0.2500""#));

        let empty = HorizontalBar {
            title: "Risk".to_string(),
            value: None,
        };
        let svg = empty.to_svg();
        assert!(svg.contains("No data"));
        assert!(!svg.contains("data-value"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let bar = HorizontalBar {
            title: "<b>".to_string(),
            value: None,
        };
        assert!(bar.to_svg().contains("&lt;b&gt;"));
    }
}
