//! Record shapes served by the valuation forecast API.
//!
//! Numeric columns arrive from upstream as text and stay as [`Figure`]s until
//! a view needs the number.

mod family;
mod figure;
mod forecast;
mod info;
mod price;
mod summary;

pub use family::{Metric, ParseKeyError, RatioFamily};
pub use figure::Figure;
pub use forecast::{ForecastStats, StockForecast};
pub use info::StockInfo;
pub use price::StockPrice;
pub use summary::StockSummary;

/// The historical multiple range of one ratio family.
#[derive(Debug, Clone, Copy)]
pub struct RatioStats<'a> {
    pub current: &'a Figure,
    pub high: &'a Figure,
    pub avg: &'a Figure,
    pub low: &'a Figure,
    pub std: &'a Figure,
}
