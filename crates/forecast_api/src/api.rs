use log::debug;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use valuation_model::{StockForecast, StockInfo, StockPrice, StockSummary};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("not found: {0}")]
    NotFound(String),
}

/// Client of the valuation forecast REST API.
#[derive(Clone)]
pub struct ForecastAPI {
    base_url: String,
    client: reqwest::Client,
    headers: HeaderMap,
}

impl ForecastAPI {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("valuation-dashboard/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(ForecastAPI {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            headers,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_forecasts(&self) -> Result<Vec<StockForecast>, ApiError> {
        self.get_json("/stock_forecasts").await
    }

    /// Forecast row of one symbol, picked out of `/stock_forecasts`.
    pub async fn get_forecast(&self, symbol: &str) -> Result<StockForecast, ApiError> {
        self.get_forecasts()
            .await?
            .into_iter()
            .find(|forecast| forecast.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| ApiError::NotFound(symbol.to_string()))
    }

    pub async fn get_summary(&self, symbol: &str) -> Result<Vec<StockSummary>, ApiError> {
        self.get_json(&format!("/stock_summary/{}", symbol)).await
    }

    pub async fn get_info(&self, symbol: &str) -> Result<StockInfo, ApiError> {
        let info: Option<StockInfo> = self.get_json(&format!("/stock_info/{}", symbol)).await?;
        info.ok_or_else(|| ApiError::NotFound(symbol.to_string()))
    }

    pub async fn get_prices(&self, symbol: &str) -> Result<Vec<StockPrice>, ApiError> {
        self.get_json(&format!("/stock_price/{}", symbol)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        debug!("get_json | url: {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(ApiError::NotFound(path.to_string())),
            status => {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    url,
                });
            }
        }

        let body = response.text().await?;
        debug!("get_json | url: {} | bytes: {}", url, body.len());

        Ok(serde_json::from_str(&body)?)
    }
}
