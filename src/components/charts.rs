//! Event timeline and recruitment-risk charts.

use chrono::NaiveDate;

use crate::chart::{HorizontalBar, LineChart, Series};
use crate::db::EventSeriesPoint;
use crate::error::RenderError;
use crate::risk::RiskFeatureAdapter;

use super::{Fragment, Leaf, RenderContext};

pub const TIMELINE_TITLE: &str = "Cumulative Event Counts Over Time";
pub const RISK_TITLE: &str = "Predicted Recruitment Risk";

/// Event counts for one date with missing values already filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCounts {
    pub date: NaiveDate,
    pub positive: i64,
    pub negative: i64,
}

/// Fill missing counts with 0 and order by date.
pub fn fill_missing(points: &[EventSeriesPoint]) -> Vec<DailyCounts> {
    let mut counts: Vec<DailyCounts> = points
        .iter()
        .map(|p| DailyCounts {
            date: p.date,
            positive: p.positive_events.unwrap_or(0),
            negative: p.negative_events.unwrap_or(0),
        })
        .collect();
    counts.sort_by_key(|c| c.date);
    counts
}

/// Running totals of both series. Not idempotent: apply exactly once.
pub fn cumulative(counts: &[DailyCounts]) -> Vec<DailyCounts> {
    let mut positive = 0;
    let mut negative = 0;
    counts
        .iter()
        .map(|c| {
            positive += c.positive;
            negative += c.negative;
            DailyCounts {
                date: c.date,
                positive,
                negative,
            }
        })
        .collect()
}

/// Dual-line chart of cumulative positive and negative events.
#[derive(Debug, Default)]
pub struct TimeSeriesChartLeaf;

impl Leaf for TimeSeriesChartLeaf {
    fn name(&self) -> &'static str {
        "event-chart"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let points = match ctx.entity_id {
            Some(id) => ctx.query.event_series(id),
            None => Vec::new(),
        };
        let totals = cumulative(&fill_missing(&points));

        let chart = LineChart {
            title: TIMELINE_TITLE.to_string(),
            x_label: "Date".to_string(),
            y_label: "Cumulative Event Count".to_string(),
            categories: totals.iter().map(|c| c.date.to_string()).collect(),
            series: vec![
                Series {
                    name: "Positive".to_string(),
                    color: "#16a34a",
                    values: totals.iter().map(|c| c.positive as f64).collect(),
                },
                Series {
                    name: "Negative".to_string(),
                    color: "#dc2626",
                    values: totals.iter().map(|c| c.negative as f64).collect(),
                },
            ],
        };

        Ok(Fragment::new(format!(
            r#"<div class="chart" data-component="event-chart">{}</div>"#,
            chart.to_svg()
        )))
    }
}

/// Single bar showing the classifier's risk for the entity.
pub struct RiskChartLeaf {
    adapter: RiskFeatureAdapter,
}

impl RiskChartLeaf {
    pub fn new(adapter: RiskFeatureAdapter) -> Self {
        Self { adapter }
    }
}

impl Leaf for RiskChartLeaf {
    fn name(&self) -> &'static str {
        "risk-chart"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Fragment, RenderError> {
        let value = match ctx.entity_id {
            Some(id) => {
                let features = ctx.query.feature_vector(id);
                self.adapter.score(ctx.query.kind(), &features)?
            }
            None => None,
        };

        let bar = HorizontalBar {
            title: RISK_TITLE.to_string(),
            value,
        };
        Ok(Fragment::new(format!(
            r#"<div class="chart" data-component="risk-chart">{}</div>"#,
            bar.to_svg()
        )))
    }
}
