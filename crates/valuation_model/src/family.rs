use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// One of the four price-to-fundamental multiples tracked per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioFamily {
    Pe,
    Ps,
    Pb,
    Pocf,
}

impl RatioFamily {
    pub const ALL: [RatioFamily; 4] = [
        RatioFamily::Pe,
        RatioFamily::Ps,
        RatioFamily::Pb,
        RatioFamily::Pocf,
    ];

    /// Column prefix used by the upstream records (`pe_high`, `pocf_avg`, ...).
    pub fn key(self) -> &'static str {
        match self {
            RatioFamily::Pe => "pe",
            RatioFamily::Ps => "ps",
            RatioFamily::Pb => "pb",
            RatioFamily::Pocf => "pocf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatioFamily::Pe => "P/E",
            RatioFamily::Ps => "P/S",
            RatioFamily::Pb => "P/B",
            RatioFamily::Pocf => "P/OCF",
        }
    }

    /// Per-share figure the multiple is applied to.
    pub fn base_metric(self) -> Metric {
        match self {
            RatioFamily::Pe => Metric::Eps,
            RatioFamily::Ps => Metric::Sps,
            RatioFamily::Pb => Metric::Nav,
            RatioFamily::Pocf => Metric::Ocf,
        }
    }
}

impl fmt::Display for RatioFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RatioFamily {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatioFamily::ALL
            .into_iter()
            .find(|family| family.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKeyError {
                kind: "ratio family",
                key: s.to_string(),
            })
    }
}

/// Key per-share and profitability figures shown in the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Eps,
    EpsGrowth,
    Sps,
    Nav,
    Ocf,
    Roe,
    NetProfitMargin,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Eps,
        Metric::EpsGrowth,
        Metric::Sps,
        Metric::Nav,
        Metric::Ocf,
        Metric::Roe,
        Metric::NetProfitMargin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Eps => "eps",
            Metric::EpsGrowth => "eps_growth",
            Metric::Sps => "sps",
            Metric::Nav => "nav",
            Metric::Ocf => "ocf",
            Metric::Roe => "roe",
            Metric::NetProfitMargin => "net_profit_margin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Eps => "EPS",
            Metric::EpsGrowth => "EPS growth",
            Metric::Sps => "Sales per share",
            Metric::Nav => "NAV per share",
            Metric::Ocf => "Operating cash flow per share",
            Metric::Roe => "ROE",
            Metric::NetProfitMargin => "Net profit margin",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKeyError {
                kind: "metric",
                key: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    kind: &'static str,
    key: String,
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.key)
    }
}

impl Error for ParseKeyError {}
