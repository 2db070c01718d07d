//! Conditional formatting and justified P/E rules for valuation ratios.

mod classifier;
mod growth_pe;

pub use classifier::{
    Bucket, DerivedRatio, Thresholds, classify, classify_derived, classify_figure, derived_ratio,
};
pub use growth_pe::{
    GROWTH_RATE_PE_TABLE, GrowthPePoint, growth_rate_for_pe, implied_growth_tooltip,
    justified_pe_tooltip, pe_for_growth_rate,
};

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("invalid thresholds: favorable_max={favorable_max}, caution_max={caution_max}")]
    InvalidThresholds { favorable_max: f64, caution_max: f64 },

    #[error("unknown bucket: {0}")]
    UnknownBucket(String),
}
