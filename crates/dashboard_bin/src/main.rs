use actix_web::{App, HttpServer, middleware::Logger, web};
use forecast_api::ForecastAPI;
use log::{error, info};
use std::process::exit;
use valuation_view::Palette;

use config::Config;
use routes::AppState;

mod config;
mod routes;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not create config: {}", e);
            exit(1);
        }
    };

    let api = match ForecastAPI::new(&config.upstream_url, config.upstream_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Could not create upstream client: {}", e);
            exit(1);
        }
    };
    info!(
        "Upstream {} | favorable <= {} | caution <= {}",
        api.base_url(),
        config.thresholds.favorable_max(),
        config.thresholds.caution_max()
    );

    let state = web::Data::new(AppState {
        api,
        thresholds: config.thresholds,
        palette: Palette::default(),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
            .wrap(Logger::default())
    })
    .bind((config.bind.as_str(), config.port))?
    .workers(config.workers)
    .run()
    .await
}
