//! Row view models for the valuation dashboard.
//!
//! Everything here is a pure transformation of upstream records; colours are
//! left to the front end via [`Palette`].

mod bands;
mod cell;
mod forecast_row;
mod metrics;
mod palette;
mod summary;

pub use bands::{BandChart, BandPoint, band_chart};
pub use cell::Cell;
pub use forecast_row::{FamilyCells, ForecastRow};
pub use metrics::{MetricPoint, metric_series};
pub use palette::Palette;
pub use summary::{Period, SummaryFamilyCells, SummaryRow, SummaryTable, latest_summary};
