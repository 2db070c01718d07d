use crate::{Period, SummaryTable};
use serde::Serialize;
use valuation_model::Metric;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    pub period: Period,
    pub value: Option<f64>,
}

/// Chart series of one key metric: the table read bottom-up, so the oldest
/// year comes first and the latest forecast closes the series.
pub fn metric_series(metric: Metric, table: &SummaryTable) -> Vec<MetricPoint> {
    table
        .rows
        .iter()
        .zip(table.records())
        .rev()
        .map(|(row, record)| MetricPoint {
            period: row.period.clone(),
            value: record.metric(metric).value(),
        })
        .collect()
}
