use crate::{Figure, Metric, RatioFamily, RatioStats};
use serde::{Deserialize, Serialize};

/// One fiscal year of `/stock_summary/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSummary {
    pub id: i64,
    pub symbol: String,
    pub year: String,
    pub max_close: Figure,
    pub avg_close: Figure,
    pub min_close: Figure,
    pub roe: Figure,
    pub eps: Figure,
    pub sps: Figure,
    pub nav: Figure,
    pub ocf: Figure,
    pub net_profit_margin: Figure,
    pub eps_growth: Figure,

    pub pe_current: Figure,
    pub pe_high: Figure,
    pub pe_avg: Figure,
    pub pe_low: Figure,
    pub pe_std: Figure,

    pub ps_current: Figure,
    pub ps_high: Figure,
    pub ps_avg: Figure,
    pub ps_low: Figure,
    pub ps_std: Figure,

    pub pb_current: Figure,
    pub pb_high: Figure,
    pub pb_avg: Figure,
    pub pb_low: Figure,
    pub pb_std: Figure,

    pub pocf_current: Figure,
    pub pocf_high: Figure,
    pub pocf_avg: Figure,
    pub pocf_low: Figure,
    pub pocf_std: Figure,

    pub created_at: String,
    pub updated_at: String,
}

impl StockSummary {
    /// Calendar year of the row, when `year` holds one.
    pub fn year_number(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    pub fn ratio(&self, family: RatioFamily) -> RatioStats<'_> {
        match family {
            RatioFamily::Pe => RatioStats {
                current: &self.pe_current,
                high: &self.pe_high,
                avg: &self.pe_avg,
                low: &self.pe_low,
                std: &self.pe_std,
            },
            RatioFamily::Ps => RatioStats {
                current: &self.ps_current,
                high: &self.ps_high,
                avg: &self.ps_avg,
                low: &self.ps_low,
                std: &self.ps_std,
            },
            RatioFamily::Pb => RatioStats {
                current: &self.pb_current,
                high: &self.pb_high,
                avg: &self.pb_avg,
                low: &self.pb_low,
                std: &self.pb_std,
            },
            RatioFamily::Pocf => RatioStats {
                current: &self.pocf_current,
                high: &self.pocf_high,
                avg: &self.pocf_avg,
                low: &self.pocf_low,
                std: &self.pocf_std,
            },
        }
    }

    pub fn metric(&self, metric: Metric) -> &Figure {
        match metric {
            Metric::Eps => &self.eps,
            Metric::EpsGrowth => &self.eps_growth,
            Metric::Sps => &self.sps,
            Metric::Nav => &self.nav,
            Metric::Ocf => &self.ocf,
            Metric::Roe => &self.roe,
            Metric::NetProfitMargin => &self.net_profit_margin,
        }
    }
}
