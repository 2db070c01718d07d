use crate::{Figure, Metric, RatioFamily, RatioStats};
use serde::{Deserialize, Serialize};

/// One row of `/stock_forecasts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockForecast {
    pub id: i64,
    pub symbol: String,
    pub price: Figure,
    pub volume: Figure,
    pub market_cap: Figure,

    pub roe_ttm: Figure,
    pub eps_ttm: Figure,
    pub sps_ttm: Figure,
    pub nav_ttm: Figure,
    pub ocf_ttm: Figure,
    pub net_profit_margin_ttm: Figure,
    pub eps_growth: Figure,
    pub average_eps_growth: Figure,

    pub pe_high: Figure,
    pub pe_avg: Figure,
    pub pe_low: Figure,
    pub pe_std: Figure,
    pub pe_current: Figure,
    pub pe_high_forecast: Figure,
    pub pe_avg_forecast: Figure,
    pub pe_low_forecast: Figure,
    pub pe_forecast_discount: Figure,

    pub ps_high: Figure,
    pub ps_avg: Figure,
    pub ps_low: Figure,
    pub ps_std: Figure,
    pub ps_current: Figure,
    pub ps_high_forecast: Figure,
    pub ps_avg_forecast: Figure,
    pub ps_low_forecast: Figure,
    pub ps_forecast_discount: Figure,

    pub pb_high: Figure,
    pub pb_avg: Figure,
    pub pb_low: Figure,
    pub pb_std: Figure,
    pub pb_current: Figure,
    pub pb_high_forecast: Figure,
    pub pb_avg_forecast: Figure,
    pub pb_low_forecast: Figure,
    pub pb_forecast_discount: Figure,

    pub pocf_high: Figure,
    pub pocf_avg: Figure,
    pub pocf_low: Figure,
    pub pocf_std: Figure,
    pub pocf_current: Figure,
    pub pocf_high_forecast: Figure,
    pub pocf_avg_forecast: Figure,
    pub pocf_low_forecast: Figure,
    pub pocf_forecast_discount: Figure,

    pub created_at: String,
    pub updated_at: String,
}

/// Forecast price band derived from one ratio family.
#[derive(Debug, Clone, Copy)]
pub struct ForecastStats<'a> {
    pub high: &'a Figure,
    pub avg: &'a Figure,
    pub low: &'a Figure,
    pub discount: &'a Figure,
}

impl StockForecast {
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

    pub fn forecast(&self, family: RatioFamily) -> ForecastStats<'_> {
        match family {
            RatioFamily::Pe => ForecastStats {
                high: &self.pe_high_forecast,
                avg: &self.pe_avg_forecast,
                low: &self.pe_low_forecast,
                discount: &self.pe_forecast_discount,
            },
            RatioFamily::Ps => ForecastStats {
                high: &self.ps_high_forecast,
                avg: &self.ps_avg_forecast,
                low: &self.ps_low_forecast,
                discount: &self.ps_forecast_discount,
            },
            RatioFamily::Pb => ForecastStats {
                high: &self.pb_high_forecast,
                avg: &self.pb_avg_forecast,
                low: &self.pb_low_forecast,
                discount: &self.pb_forecast_discount,
            },
            RatioFamily::Pocf => ForecastStats {
                high: &self.pocf_high_forecast,
                avg: &self.pocf_avg_forecast,
                low: &self.pocf_low_forecast,
                discount: &self.pocf_forecast_discount,
            },
        }
    }

    /// Trailing-twelve-month value of a key metric.
    pub fn metric(&self, metric: Metric) -> &Figure {
        match metric {
            Metric::Eps => &self.eps_ttm,
            Metric::EpsGrowth => &self.eps_growth,
            Metric::Sps => &self.sps_ttm,
            Metric::Nav => &self.nav_ttm,
            Metric::Ocf => &self.ocf_ttm,
            Metric::Roe => &self.roe_ttm,
            Metric::NetProfitMargin => &self.net_profit_margin_ttm,
        }
    }
}
