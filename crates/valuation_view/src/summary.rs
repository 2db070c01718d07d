use crate::Cell;
use serde::Serialize;
use valuation_model::{Figure, RatioFamily, StockForecast, StockInfo, StockSummary};
use valuation_rules::{DerivedRatio, Thresholds, justified_pe_tooltip};

/// Row label of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "year", rename_all = "lowercase")]
pub enum Period {
    /// Current forecast values, shown above the yearly history.
    Latest,
    Year(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub period: Period,
    pub max_close: Figure,
    pub avg_close: Figure,
    pub min_close: Figure,
    pub eps: Figure,
    pub eps_growth: Cell,
    pub sps: Figure,
    pub nav: Figure,
    pub ocf: Figure,
    pub roe: Figure,
    pub net_profit_margin: Figure,
    pub families: Vec<SummaryFamilyCells>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryFamilyCells {
    pub family: RatioFamily,
    pub label: &'static str,
    pub current: Cell,
    pub high: Cell,
    pub avg: Cell,
    pub low: Cell,
    pub std: Figure,
}

/// Detail table of one symbol: the latest forecast followed by its history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub symbol: String,
    pub title: String,
    pub rows: Vec<SummaryRow>,
    #[serde(skip)]
    records: Vec<StockSummary>,
}

/// Summary-shaped copy of a forecast, used as the first table row.
///
/// Close-price statistics do not exist for the forecast and are left as `-`.
pub fn latest_summary(forecast: &StockForecast) -> StockSummary {
    StockSummary {
        id: forecast.id,
        symbol: forecast.symbol.clone(),
        year: String::new(),
        max_close: Figure::missing(),
        avg_close: Figure::missing(),
        min_close: Figure::missing(),
        roe: forecast.roe_ttm.clone(),
        eps: forecast.eps_ttm.clone(),
        sps: forecast.sps_ttm.clone(),
        nav: forecast.nav_ttm.clone(),
        ocf: forecast.ocf_ttm.clone(),
        net_profit_margin: forecast.net_profit_margin_ttm.clone(),
        eps_growth: forecast.eps_growth.clone(),

        pe_current: forecast.pe_current.clone(),
        pe_high: forecast.pe_high.clone(),
        pe_avg: forecast.pe_avg.clone(),
        pe_low: forecast.pe_low.clone(),
        pe_std: forecast.pe_std.clone(),

        ps_current: forecast.ps_current.clone(),
        ps_high: forecast.ps_high.clone(),
        ps_avg: forecast.ps_avg.clone(),
        ps_low: forecast.ps_low.clone(),
        ps_std: forecast.ps_std.clone(),

        pb_current: forecast.pb_current.clone(),
        pb_high: forecast.pb_high.clone(),
        pb_avg: forecast.pb_avg.clone(),
        pb_low: forecast.pb_low.clone(),
        pb_std: forecast.pb_std.clone(),

        pocf_current: forecast.pocf_current.clone(),
        pocf_high: forecast.pocf_high.clone(),
        pocf_avg: forecast.pocf_avg.clone(),
        pocf_low: forecast.pocf_low.clone(),
        pocf_std: forecast.pocf_std.clone(),

        created_at: forecast.created_at.clone(),
        updated_at: forecast.updated_at.clone(),
    }
}

impl SummaryTable {
    pub fn build(
        forecast: &StockForecast,
        info: Option<&StockInfo>,
        history: &[StockSummary],
        thresholds: Thresholds,
    ) -> Self {
        let title = match info {
            Some(info) if !info.company_name.trim().is_empty() => {
                format!("{}: {}", forecast.symbol, info.company_name.trim())
            }
            _ => forecast.symbol.clone(),
        };

        let mut records = Vec::with_capacity(history.len() + 1);
        records.push(latest_summary(forecast));
        records.extend(history.iter().cloned().map(|mut record| {
            // yearly rows only carry the range, never a current multiple
            for family in RatioFamily::ALL {
                clear_current(&mut record, family);
            }
            record
        }));

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let period = if index == 0 {
                    Period::Latest
                } else {
                    Period::Year(record.year.clone())
                };
                SummaryRow::from_record(period, record, thresholds)
            })
            .collect();

        SummaryTable {
            symbol: forecast.symbol.clone(),
            title,
            rows,
            records,
        }
    }

    /// The synthetic latest-forecast record.
    pub fn latest(&self) -> &StockSummary {
        &self.records[0]
    }

    /// All records, parallel to `rows`.
    pub(crate) fn records(&self) -> &[StockSummary] {
        &self.records
    }

    /// Yearly records in upstream order.
    pub fn history(&self) -> &[StockSummary] {
        &self.records[1..]
    }

    pub fn for_year(&self, year: i32) -> Option<&StockSummary> {
        self.history()
            .iter()
            .find(|record| record.year_number() == Some(year))
    }
}

fn clear_current(record: &mut StockSummary, family: RatioFamily) {
    let current = match family {
        RatioFamily::Pe => &mut record.pe_current,
        RatioFamily::Ps => &mut record.ps_current,
        RatioFamily::Pb => &mut record.pb_current,
        RatioFamily::Pocf => &mut record.pocf_current,
    };
    *current = Figure::missing();
}

impl SummaryRow {
    fn from_record(period: Period, record: &StockSummary, thresholds: Thresholds) -> Self {
        SummaryRow {
            period,
            max_close: record.max_close.clone(),
            avg_close: record.avg_close.clone(),
            min_close: record.min_close.clone(),
            eps: record.eps.clone(),
            eps_growth: Cell::plain(&record.eps_growth)
                .with_tooltip(record.eps_growth.value().map(justified_pe_tooltip)),
            sps: record.sps.clone(),
            nav: record.nav.clone(),
            ocf: record.ocf.clone(),
            roe: record.roe.clone(),
            net_profit_margin: record.net_profit_margin.clone(),
            families: RatioFamily::ALL
                .into_iter()
                .map(|family| {
                    let stats = record.ratio(family);
                    let is_pe = family == RatioFamily::Pe;
                    SummaryFamilyCells {
                        family,
                        label: family.label(),
                        current: Cell::bucketed(
                            stats.current,
                            DerivedRatio::CurrentToAverage(family)
                                .classify_summary(record, thresholds),
                        )
                        .with_implied_growth(is_pe),
                        high: Cell::plain(stats.high).with_implied_growth(is_pe),
                        avg: Cell::plain(stats.avg).with_implied_growth(is_pe),
                        low: Cell::plain(stats.low).with_implied_growth(is_pe),
                        std: stats.std.clone(),
                    }
                })
                .collect(),
        }
    }
}
