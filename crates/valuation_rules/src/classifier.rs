use crate::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use valuation_model::{RatioFamily, StockForecast, StockSummary};

/// Display class of a ratio cell. Views map these to colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Favorable,
    Caution,
    Unfavorable,
    Neutral,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::Favorable,
        Bucket::Caution,
        Bucket::Unfavorable,
        Bucket::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Favorable => "favorable",
            Bucket::Caution => "caution",
            Bucket::Unfavorable => "unfavorable",
            Bucket::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == s)
            .ok_or_else(|| RulesError::UnknownBucket(s.to_string()))
    }
}

/// Upper bounds of the favorable and caution buckets.
///
/// Anything above `caution_max` is unfavorable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    favorable_max: f64,
    caution_max: f64,
}

impl Thresholds {
    /// Used by the forecast grid and the summary table.
    pub const DISCOUNT: Thresholds = Thresholds {
        favorable_max: 1.0,
        caution_max: 1.5,
    };

    pub const INTERMEDIATE: Thresholds = Thresholds {
        favorable_max: 0.8,
        caution_max: 1.5,
    };

    /// First discount grid, favorable only up to half the forecast price.
    pub const EARLY: Thresholds = Thresholds {
        favorable_max: 0.5,
        caution_max: 1.5,
    };

    pub fn new(favorable_max: f64, caution_max: f64) -> Result<Self, RulesError> {
        if !favorable_max.is_finite()
            || !caution_max.is_finite()
            || favorable_max < 0.0
            || caution_max < favorable_max
        {
            return Err(RulesError::InvalidThresholds {
                favorable_max,
                caution_max,
            });
        }
        Ok(Thresholds {
            favorable_max,
            caution_max,
        })
    }

    pub fn favorable_max(&self) -> f64 {
        self.favorable_max
    }

    pub fn caution_max(&self) -> f64 {
        self.caution_max
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::DISCOUNT
    }
}

pub fn classify(ratio: f64, thresholds: Thresholds) -> Bucket {
    if !ratio.is_finite() || ratio < 0.0 {
        Bucket::Neutral
    } else if ratio <= thresholds.favorable_max {
        Bucket::Favorable
    } else if ratio <= thresholds.caution_max {
        Bucket::Caution
    } else {
        Bucket::Unfavorable
    }
}

/// Classifies a value that may be absent; absent is neutral.
pub fn classify_figure(ratio: Option<f64>, thresholds: Thresholds) -> Bucket {
    ratio.map_or(Bucket::Neutral, |r| classify(r, thresholds))
}

/// `numerator / denominator`, or `None` when either side is missing or the
/// denominator is zero.
pub fn derived_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|r| r.is_finite())
}

pub fn classify_derived(
    current: Option<f64>,
    average: Option<f64>,
    thresholds: Thresholds,
) -> Bucket {
    classify_figure(derived_ratio(current, average), thresholds)
}

/// Which fields of a row feed a ratio cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedRatio {
    /// `{family}_current / {family}_avg`
    CurrentToAverage(RatioFamily),
    /// `price / {family}_avg_forecast`
    PriceToAverageForecast(RatioFamily),
    /// stored `{family}_forecast_discount`
    ForecastDiscount(RatioFamily),
}

impl DerivedRatio {
    pub fn value_in_forecast(self, forecast: &StockForecast) -> Option<f64> {
        match self {
            DerivedRatio::CurrentToAverage(family) => {
                let stats = forecast.ratio(family);
                derived_ratio(stats.current.value(), stats.avg.value())
            }
            DerivedRatio::PriceToAverageForecast(family) => derived_ratio(
                forecast.price.value(),
                forecast.forecast(family).avg.value(),
            ),
            DerivedRatio::ForecastDiscount(family) => forecast.forecast(family).discount.value(),
        }
    }

    /// Summary rows have no price or forecast columns, so only
    /// [`DerivedRatio::CurrentToAverage`] yields a value.
    pub fn value_in_summary(self, summary: &StockSummary) -> Option<f64> {
        match self {
            DerivedRatio::CurrentToAverage(family) => {
                let stats = summary.ratio(family);
                derived_ratio(stats.current.value(), stats.avg.value())
            }
            DerivedRatio::PriceToAverageForecast(_) | DerivedRatio::ForecastDiscount(_) => None,
        }
    }

    pub fn classify_forecast(self, forecast: &StockForecast, thresholds: Thresholds) -> Bucket {
        classify_figure(self.value_in_forecast(forecast), thresholds)
    }

    pub fn classify_summary(self, summary: &StockSummary, thresholds: Thresholds) -> Bucket {
        classify_figure(self.value_in_summary(summary), thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuation_model::Figure;

    #[test]
    fn classify_pass_discount_scenario() {
        let ratios = [-1.0, 0.0, 0.5, 1.0, 1.2, 1.6];
        let buckets: Vec<Bucket> = ratios
            .iter()
            .map(|r| classify(*r, Thresholds::DISCOUNT))
            .collect();
        assert_eq!(
            buckets,
            vec![
                Bucket::Neutral,
                Bucket::Favorable,
                Bucket::Favorable,
                Bucket::Favorable,
                Bucket::Caution,
                Bucket::Unfavorable,
            ]
        );
    }

    #[test]
    fn classify_pass_boundaries() {
        for thresholds in [Thresholds::DISCOUNT, Thresholds::INTERMEDIATE, Thresholds::EARLY] {
            let favorable_max = thresholds.favorable_max();
            assert_eq!(classify(favorable_max, thresholds), Bucket::Favorable);
            assert_eq!(classify(favorable_max + 1e-9, thresholds), Bucket::Caution);
            assert_eq!(classify(1.5, thresholds), Bucket::Caution);
            assert_eq!(classify(1.5 + 1e-9, thresholds), Bucket::Unfavorable);
        }
    }

    #[test]
    fn classify_pass_early_scheme() {
        assert_eq!(classify(0.5, Thresholds::EARLY), Bucket::Favorable);
        assert_eq!(classify(0.7, Thresholds::EARLY), Bucket::Caution);
        assert_eq!(classify(0.7, Thresholds::INTERMEDIATE), Bucket::Favorable);
    }

    #[test]
    fn classify_pass_non_finite_is_neutral() {
        for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.001] {
            assert_eq!(classify(ratio, Thresholds::default()), Bucket::Neutral);
        }
        assert_eq!(classify_figure(None, Thresholds::default()), Bucket::Neutral);
    }

    #[test]
    fn classify_derived_pass_division_guard() {
        let t = Thresholds::default();
        assert_eq!(classify_derived(Some(10.0), Some(0.0), t), Bucket::Neutral);
        assert_eq!(classify_derived(Some(10.0), None, t), Bucket::Neutral);
        assert_eq!(classify_derived(None, Some(4.0), t), Bucket::Neutral);
        assert_eq!(classify_derived(Some(5.0), Some(4.0), t), Bucket::Caution);
        assert_eq!(classify_derived(Some(-5.0), Some(4.0), t), Bucket::Neutral);
    }

    #[test]
    fn thresholds_fail_invalid() {
        assert!(Thresholds::new(1.5, 1.0).is_err());
        assert!(Thresholds::new(-0.1, 1.0).is_err());
        assert!(Thresholds::new(f64::NAN, 1.0).is_err());
        assert_eq!(Thresholds::new(1.0, 1.5).unwrap(), Thresholds::DISCOUNT);
    }

    #[test]
    fn bucket_pass_identifiers_round_trip() {
        for bucket in Bucket::ALL {
            assert_eq!(bucket.to_string().parse::<Bucket>().unwrap(), bucket);
            let json = serde_json::to_string(&bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.as_str()));
        }
        assert!("green".parse::<Bucket>().is_err());
    }

    #[test]
    fn derived_ratio_pass_forecast_fields() {
        let forecast = StockForecast {
            price: Figure::new("150"),
            ps_current: Figure::new("6"),
            ps_avg: Figure::new("5"),
            ps_avg_forecast: Figure::new("200"),
            ps_forecast_discount: Figure::new("1.7"),
            ..Default::default()
        };
        let t = Thresholds::default();

        assert_eq!(
            DerivedRatio::CurrentToAverage(RatioFamily::Ps).value_in_forecast(&forecast),
            Some(1.2)
        );
        assert_eq!(
            DerivedRatio::PriceToAverageForecast(RatioFamily::Ps).classify_forecast(&forecast, t),
            Bucket::Favorable
        );
        assert_eq!(
            DerivedRatio::ForecastDiscount(RatioFamily::Ps).classify_forecast(&forecast, t),
            Bucket::Unfavorable
        );
        assert_eq!(
            DerivedRatio::CurrentToAverage(RatioFamily::Pb).classify_forecast(&forecast, t),
            Bucket::Neutral
        );
    }

    #[test]
    fn derived_ratio_pass_summary_has_no_forecast() {
        let summary = StockSummary {
            pe_current: Figure::new("30"),
            pe_avg: Figure::new("20"),
            ps_current: Figure::new("31"),
            ps_avg: Figure::new("20"),
            ..Default::default()
        };
        let t = Thresholds::default();
        // 30 / 20 sits exactly on caution_max
        assert_eq!(
            DerivedRatio::CurrentToAverage(RatioFamily::Pe).classify_summary(&summary, t),
            Bucket::Caution
        );
        assert_eq!(
            DerivedRatio::CurrentToAverage(RatioFamily::Ps).value_in_summary(&summary),
            Some(1.55)
        );
        assert_eq!(
            DerivedRatio::CurrentToAverage(RatioFamily::Ps).classify_summary(&summary, t),
            Bucket::Unfavorable
        );
        assert_eq!(
            DerivedRatio::ForecastDiscount(RatioFamily::Pe).classify_summary(&summary, t),
            Bucket::Neutral
        );
    }
}
