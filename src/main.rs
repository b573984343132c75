use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use trip_planner_api::config::AppConfig;
use trip_planner_api::middleware::cors::CorsHeaders;
use trip_planner_api::routes;
use trip_planner_api::services::extraction_service::ItineraryExtractor;
use trip_planner_api::services::gateway::GatewayProvider;
use trip_planner_api::services::itinerary_service::ItineraryService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    match &config.gateway {
        Ok(gateway) => info!("Completion gateway configured: {:?}", gateway),
        Err(err) => error!("{}; itinerary requests will fail until it is set", err),
    }
    info!("Itinerary extraction mode: {:?}", config.extraction_mode);

    let service = web::Data::new(ItineraryService::new(
        GatewayProvider::from_config(config.gateway),
        ItineraryExtractor::new(config.extraction_mode),
    ));

    info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(CorsHeaders)
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes::configure::<GatewayProvider>)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
