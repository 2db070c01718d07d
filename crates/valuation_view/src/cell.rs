use serde::Serialize;
use valuation_model::Figure;
use valuation_rules::{Bucket, implied_growth_tooltip};

/// A grid cell: the raw figure plus optional formatting hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub value: Figure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Bucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Cell {
    pub fn plain(value: &Figure) -> Self {
        Cell {
            value: value.clone(),
            bucket: None,
            tooltip: None,
        }
    }

    pub fn bucketed(value: &Figure, bucket: Bucket) -> Self {
        Cell {
            bucket: Some(bucket),
            ..Cell::plain(value)
        }
    }

    pub fn with_tooltip(mut self, tooltip: Option<String>) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Attaches the implied growth tooltip when the cell holds a P/E.
    pub fn with_implied_growth(self, is_pe: bool) -> Self {
        let tooltip = if is_pe {
            self.value.value().map(implied_growth_tooltip)
        } else {
            None
        };
        self.with_tooltip(tooltip)
    }
}
