use crate::SummaryTable;
use chrono::NaiveDate;
use serde::Serialize;
use valuation_model::{RatioFamily, StockPrice};

/// Close price overlaid with the price implied by historical multiples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandChart {
    pub symbol: String,
    pub family: RatioFamily,
    pub label: &'static str,
    pub points: Vec<BandPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandPoint {
    pub date: NaiveDate,
    pub close: Option<f64>,
    pub high: Option<f64>,
    pub plus_one_std: Option<f64>,
    pub avg: Option<f64>,
    pub minus_one_std: Option<f64>,
    pub low: Option<f64>,
}

/// Builds the band chart of one family.
///
/// Multiples always come from the latest forecast row. The per-share base
/// comes from the summary row of the price's year, or the latest row when
/// that year is not in the table.
pub fn band_chart(family: RatioFamily, table: &SummaryTable, prices: &[StockPrice]) -> BandChart {
    let stats = table.latest().ratio(family);
    let (high, avg, low, std) = (
        stats.high.value(),
        stats.avg.value(),
        stats.low.value(),
        stats.std.value(),
    );
    let plus_one_std = avg.zip(std).map(|(avg, std)| avg + std);
    let minus_one_std = avg.zip(std).map(|(avg, std)| avg - std);

    let points = prices
        .iter()
        .map(|price| {
            let base = table
                .for_year(price.year())
                .unwrap_or_else(|| table.latest())
                .metric(family.base_metric())
                .value();
            let scale = |multiple: Option<f64>| multiple.zip(base).map(|(m, b)| m * b);

            BandPoint {
                date: price.date,
                close: price.close_value(),
                high: scale(high),
                plus_one_std: scale(plus_one_std),
                avg: scale(avg),
                minus_one_std: scale(minus_one_std),
                low: scale(low),
            }
        })
        .collect();

    BandChart {
        symbol: table.symbol.clone(),
        family,
        label: family.label(),
        points,
    }
}
