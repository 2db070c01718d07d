use crate::utils::sanitize_symbol;
use actix_web::{HttpResponse, Responder, get, web};
use forecast_api::{ApiError, ForecastAPI};
use log::{error, warn};
use serde::Serialize;
use valuation_model::{Metric, RatioFamily};
use valuation_rules::{Thresholds, growth_rate_for_pe, pe_for_growth_rate};
use valuation_view::{ForecastRow, Palette, SummaryTable, band_chart, metric_series};

pub struct AppState {
    pub api: ForecastAPI,
    pub thresholds: Thresholds,
    pub palette: Palette,
}

#[derive(Serialize)]
struct StatusResponse {
    status: String,
}

impl StatusResponse {
    fn new(status: &str) -> Self {
        StatusResponse {
            status: status.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GrowthPeResponse {
    growth_rate: f64,
    pe: f64,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthcheck)
        .service(get_forecasts)
        .service(get_summary)
        .service(get_bands)
        .service(get_metrics)
        .service(get_pe_for_growth_rate)
        .service(get_growth_rate_for_pe)
        .service(get_palette);
}

#[get("/healthcheck")]
async fn healthcheck() -> impl Responder {
    web::Json(StatusResponse::new("ok"))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(StatusResponse::new("not found"))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(StatusResponse::new(message))
}

fn upstream_error(err: ApiError) -> HttpResponse {
    match err {
        ApiError::NotFound(what) => {
            warn!("upstream | not found: {}", what);
            HttpResponse::NotFound().json(StatusResponse::new("not found"))
        }
        err => {
            error!("upstream | {}", err);
            HttpResponse::BadGateway().json(StatusResponse::new("upstream error"))
        }
    }
}

#[get("/forecasts")]
async fn get_forecasts(state: web::Data<AppState>) -> HttpResponse {
    match state.api.get_forecasts().await {
        Ok(forecasts) => {
            let rows: Vec<ForecastRow> = forecasts
                .iter()
                .map(|forecast| ForecastRow::from_forecast(forecast, state.thresholds))
                .collect();
            HttpResponse::Ok().json(rows)
        }
        Err(err) => upstream_error(err),
    }
}

async fn load_summary(state: &AppState, symbol: &str) -> Result<SummaryTable, ApiError> {
    let (forecast, history, info) = tokio::join!(
        state.api.get_forecast(symbol),
        state.api.get_summary(symbol),
        state.api.get_info(symbol),
    );
    let forecast = forecast?;
    let history = history?;
    // company name is cosmetic, the table renders without it
    let info = match info {
        Ok(info) => Some(info),
        Err(err) => {
            warn!("load_summary | no info for {}: {}", symbol, err);
            None
        }
    };

    Ok(SummaryTable::build(
        &forecast,
        info.as_ref(),
        &history,
        state.thresholds,
    ))
}

#[get("/summary/{symbol}")]
async fn get_summary(symbol: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let symbol = sanitize_symbol(&symbol);
    match load_summary(&state, &symbol).await {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => upstream_error(err),
    }
}

#[get("/bands/{symbol}/{family}")]
async fn get_bands(path: web::Path<(String, String)>, state: web::Data<AppState>) -> HttpResponse {
    let (symbol, family) = path.into_inner();
    let family: RatioFamily = match family.parse() {
        Ok(family) => family,
        Err(err) => return bad_request(&err.to_string()),
    };
    let symbol = sanitize_symbol(&symbol);

    let (table, prices) = tokio::join!(
        load_summary(&state, &symbol),
        state.api.get_prices(&symbol)
    );
    match table.and_then(|table| prices.map(|prices| band_chart(family, &table, &prices))) {
        Ok(chart) => HttpResponse::Ok().json(chart),
        Err(err) => upstream_error(err),
    }
}

#[get("/metrics/{symbol}/{metric}")]
async fn get_metrics(path: web::Path<(String, String)>, state: web::Data<AppState>) -> HttpResponse {
    let (symbol, metric) = path.into_inner();
    let metric: Metric = match metric.parse() {
        Ok(metric) => metric,
        Err(err) => return bad_request(&err.to_string()),
    };
    let symbol = sanitize_symbol(&symbol);

    match load_summary(&state, &symbol).await {
        Ok(table) => HttpResponse::Ok().json(metric_series(metric, &table)),
        Err(err) => upstream_error(err),
    }
}

#[get("/growth/pe/{rate}")]
async fn get_pe_for_growth_rate(rate: web::Path<f64>) -> impl Responder {
    let pe = pe_for_growth_rate(rate.into_inner());
    web::Json(GrowthPeResponse {
        growth_rate: growth_rate_for_pe(pe),
        pe,
    })
}

#[get("/growth/rate/{pe}")]
async fn get_growth_rate_for_pe(pe: web::Path<f64>) -> impl Responder {
    let growth_rate = growth_rate_for_pe(pe.into_inner());
    web::Json(GrowthPeResponse {
        growth_rate,
        pe: pe_for_growth_rate(growth_rate),
    })
}

#[get("/palette")]
async fn get_palette(state: web::Data<AppState>) -> impl Responder {
    web::Json(state.palette.clone())
}
