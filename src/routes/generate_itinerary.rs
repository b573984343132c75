use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{itinerary::ItineraryResponse, trip_request::TripRequest};
use crate::services::completion::{CompletionError, CompletionOperations};
use crate::services::itinerary_service::ItineraryService;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/*
    POST /generate-itinerary
*/
pub async fn generate<C: CompletionOperations + 'static>(
    service: web::Data<ItineraryService<C>>,
    body: web::Bytes,
) -> impl Responder {
    let request_id = Uuid::new_v4();

    let trip: TripRequest = match serde_json::from_slice(&body) {
        Ok(trip) => trip,
        Err(err) => {
            error!("[{}] Failed to read trip request: {}", request_id, err);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: INVALID_BODY_MESSAGE.to_string(),
            });
        }
    };

    info!(
        "[{}] Generating itinerary for {} ({} to {}), budget {}, interests [{}]",
        request_id,
        trip.destination,
        trip.start_date,
        trip.end_date,
        trip.budget_label(),
        trip.interests_list()
    );

    match service.generate(&trip).await {
        Ok(itinerary) => {
            info!(
                "[{}] Itinerary generated ({})",
                request_id,
                if itinerary.is_structured() { "structured" } else { "raw" }
            );
            HttpResponse::Ok().json(ItineraryResponse { itinerary })
        }
        Err(err) => error_response(request_id, &err),
    }
}

fn error_response(request_id: Uuid, err: &CompletionError) -> HttpResponse {
    error!("[{}] Error generating itinerary: {}", request_id, err.log_summary());

    HttpResponse::build(err.status_code()).json(ErrorResponse {
        error: err.client_message().to_string(),
    })
}
