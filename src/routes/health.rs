use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::completion::CompletionOperations;
use crate::services::itinerary_service::ItineraryService;

const GATEWAY_CONFIGURED: &str = "configured";
const GATEWAY_MISSING_KEY: &str = "missing_api_key";

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    version: String,
    gateway: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/// Reports configuration only; the gateway itself is never called here.
pub async fn health_check<C: CompletionOperations + 'static>(
    service: web::Data<ItineraryService<C>>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gateway: GATEWAY_CONFIGURED.to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
    };

    let gateway_result = check_gateway(service.provider());
    if gateway_result.status != "ok" {
        health.status = "degraded".to_string();
        health.gateway = GATEWAY_MISSING_KEY.to_string();
    }
    health
        .services
        .insert("completion_gateway".to_string(), gateway_result);

    HttpResponse::Ok().json(health)
}

fn check_gateway<C: CompletionOperations>(provider: &C) -> ServiceStatus {
    let status = if provider.is_configured() { "ok" } else { "error" };

    ServiceStatus {
        status: status.to_string(),
        details: Some(provider.describe()),
    }
}
