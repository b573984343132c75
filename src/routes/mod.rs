pub mod generate_itinerary;
pub mod health;

use actix_web::web;

use crate::services::completion::CompletionOperations;

/// Route table for a service backed by the completion provider `C`.
/// Expects `web::Data<ItineraryService<C>>` to be registered on the app.
pub fn configure<C: CompletionOperations + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check::<C>))
        .route("/", web::post().to(generate_itinerary::generate::<C>))
        .route(
            "/generate-itinerary",
            web::post().to(generate_itinerary::generate::<C>),
        );
}
