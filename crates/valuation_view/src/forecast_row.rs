use crate::Cell;
use serde::Serialize;
use valuation_model::{Figure, RatioFamily, StockForecast};
use valuation_rules::{DerivedRatio, Thresholds, justified_pe_tooltip};

/// One line of the forecast grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub id: i64,
    pub symbol: String,
    pub price: Figure,
    pub volume: Figure,
    pub market_cap: Figure,
    pub roe: Figure,
    pub net_profit_margin: Figure,
    pub average_eps_growth: Cell,
    pub families: Vec<FamilyCells>,
}

/// Column group of one ratio family in the forecast grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyCells {
    pub family: RatioFamily,
    pub label: &'static str,
    pub base_metric: Figure,
    pub current: Cell,
    pub high: Cell,
    pub avg: Cell,
    pub low: Cell,
    /// Price coloured against the average forecast price.
    pub price: Cell,
    pub high_forecast: Figure,
    pub avg_forecast: Figure,
    pub low_forecast: Figure,
    pub discount: Cell,
}

impl ForecastRow {
    pub fn from_forecast(forecast: &StockForecast, thresholds: Thresholds) -> Self {
        let average_eps_growth = Cell::plain(&forecast.average_eps_growth)
            .with_tooltip(forecast.average_eps_growth.value().map(justified_pe_tooltip));

        ForecastRow {
            id: forecast.id,
            symbol: forecast.symbol.clone(),
            price: forecast.price.clone(),
            volume: forecast.volume.clone(),
            market_cap: forecast.market_cap.clone(),
            roe: forecast.roe_ttm.clone(),
            net_profit_margin: forecast.net_profit_margin_ttm.clone(),
            average_eps_growth,
            families: RatioFamily::ALL
                .into_iter()
                .map(|family| FamilyCells::from_forecast(forecast, family, thresholds))
                .collect(),
        }
    }

    pub fn family(&self, family: RatioFamily) -> Option<&FamilyCells> {
        self.families.iter().find(|cells| cells.family == family)
    }
}

impl FamilyCells {
    fn from_forecast(forecast: &StockForecast, family: RatioFamily, thresholds: Thresholds) -> Self {
        let stats = forecast.ratio(family);
        let band = forecast.forecast(family);
        let is_pe = family == RatioFamily::Pe;

        FamilyCells {
            family,
            label: family.label(),
            base_metric: forecast.metric(family.base_metric()).clone(),
            current: Cell::bucketed(
                stats.current,
                DerivedRatio::CurrentToAverage(family).classify_forecast(forecast, thresholds),
            )
            .with_implied_growth(is_pe),
            high: Cell::plain(stats.high).with_implied_growth(is_pe),
            avg: Cell::plain(stats.avg).with_implied_growth(is_pe),
            low: Cell::plain(stats.low).with_implied_growth(is_pe),
            price: Cell::bucketed(
                &forecast.price,
                DerivedRatio::PriceToAverageForecast(family).classify_forecast(forecast, thresholds),
            ),
            high_forecast: band.high.clone(),
            avg_forecast: band.avg.clone(),
            low_forecast: band.low.clone(),
            discount: Cell::bucketed(
                band.discount,
                DerivedRatio::ForecastDiscount(family).classify_forecast(forecast, thresholds),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use valuation_rules::Bucket;

    fn sample() -> StockForecast {
        StockForecast {
            id: 1,
            symbol: "NVDA".to_string(),
            price: Figure::new("120"),
            average_eps_growth: Figure::new("24.6"),
            eps_ttm: Figure::new("2.53"),
            pe_current: Figure::new("47.4"),
            pe_high: Figure::new("68.5"),
            pe_avg: Figure::new("40.1"),
            pe_low: Figure::new("20.5"),
            pe_avg_forecast: Figure::new("101.5"),
            pe_forecast_discount: Figure::new("0.82"),
            pb_current: Figure::new("-3"),
            pb_avg: Figure::new("12"),
            ..Default::default()
        }
    }

    #[test]
    fn forecast_row_pass_pe_cells() {
        let row = ForecastRow::from_forecast(&sample(), Thresholds::DISCOUNT);
        let pe = row.family(RatioFamily::Pe).unwrap();

        assert_eq!(pe.label, "P/E");
        assert_eq!(pe.base_metric, Figure::new("2.53"));
        assert_eq!(pe.current.bucket, Some(Bucket::Caution));
        assert_eq!(pe.current.tooltip.as_deref(), Some("Implied growth: 19%"));
        assert_eq!(pe.high.bucket, None);
        assert_eq!(pe.price.bucket, Some(Bucket::Caution));
        assert_eq!(pe.discount.bucket, Some(Bucket::Favorable));
    }

    #[test]
    fn forecast_row_pass_average_growth_tooltip() {
        let row = ForecastRow::from_forecast(&sample(), Thresholds::DISCOUNT);
        assert_eq!(
            row.average_eps_growth.tooltip.as_deref(),
            Some("Justified P/E: 58.5")
        );
    }

    #[test]
    fn forecast_row_pass_missing_and_negative_are_neutral() {
        let row = ForecastRow::from_forecast(&sample(), Thresholds::DISCOUNT);
        let ps = row.family(RatioFamily::Ps).unwrap();
        assert_eq!(ps.current.bucket, Some(Bucket::Neutral));
        assert_eq!(ps.price.bucket, Some(Bucket::Neutral));
        assert_eq!(ps.discount.bucket, Some(Bucket::Neutral));
        assert_eq!(ps.current.tooltip, None);

        let pb = row.family(RatioFamily::Pb).unwrap();
        assert_eq!(pb.current.bucket, Some(Bucket::Neutral));
    }

    #[test]
    fn forecast_row_pass_threshold_scheme_applies() {
        let row = ForecastRow::from_forecast(&sample(), Thresholds::EARLY);
        let pe = row.family(RatioFamily::Pe).unwrap();
        assert_eq!(pe.discount.bucket, Some(Bucket::Caution));
        assert_eq!(row.families.len(), 4);
    }
}
