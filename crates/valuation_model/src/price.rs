use crate::Figure;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// One trading day of `/stock_price/{symbol}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPrice {
    #[serde(deserialize_with = "deserialize_trade_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub open: Figure,
    #[serde(default)]
    pub high: Figure,
    #[serde(default)]
    pub low: Figure,
    #[serde(default)]
    pub close: Figure,
    #[serde(default)]
    pub adj_close: Figure,
    #[serde(default)]
    pub volume: Figure,
}

impl StockPrice {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Adjusted close, or the raw close when no adjusted value was sent.
    pub fn close_value(&self) -> Option<f64> {
        self.adj_close.value().or_else(|| self.close.value())
    }
}

// "2024-03-01" and "2024-03-01 00:00:00" both occur upstream
fn deserialize_trade_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_price_pass_deserialize() {
        let price: StockPrice = serde_json::from_str(
            r#"{"date": "2023-12-29", "close": 192.53, "adjClose": 191.59, "volume": 42628802}"#,
        )
        .unwrap();
        assert_eq!(price.date, NaiveDate::from_ymd_opt(2023, 12, 29).unwrap());
        assert_eq!(price.year(), 2023);
        assert_eq!(price.close_value(), Some(191.59));
    }

    #[test]
    fn stock_price_pass_datetime_and_close_fallback() {
        let price: StockPrice =
            serde_json::from_str(r#"{"date": "2024-01-02 00:00:00", "close": "185.64"}"#).unwrap();
        assert_eq!(price.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(price.close_value(), Some(185.64));
    }

    #[test]
    fn stock_price_fail_bad_date() {
        let result = serde_json::from_str::<StockPrice>(r#"{"date": "01/02/2024"}"#);
        assert!(result.is_err());
    }
}
