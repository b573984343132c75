#![allow(dead_code)]

use actix_web::{
    body::{BoxBody, EitherBody},
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use trip_planner_api::middleware::cors::CorsHeaders;
use trip_planner_api::routes;
use trip_planner_api::services::completion::{CompletionError, CompletionOperations};
use trip_planner_api::services::extraction_service::ItineraryExtractor;
use trip_planner_api::services::itinerary_service::ItineraryService;

/// Completion provider answering every call with a canned reply.
pub struct StubProvider {
    reply: Result<String, CompletionError>,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(err: CompletionError) -> Self {
        Self {
            reply: Err(err),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl CompletionOperations for StubProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn is_configured(&self) -> bool {
        !matches!(self.reply, Err(CompletionError::Misconfigured(_)))
    }

    fn describe(&self) -> String {
        "stub provider".to_string()
    }
}

pub fn create_app<C: CompletionOperations + 'static>(
    provider: C,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ItineraryService::new(
            provider,
            ItineraryExtractor::default(),
        )))
        .wrap(CorsHeaders)
        .configure(routes::configure::<C>)
}

pub fn kyoto_request() -> Value {
    json!({
        "destination": "Kyoto",
        "startDate": "2025-04-01",
        "endDate": "2025-04-03",
        "budget": "moderate",
        "interests": ["culture", "food"]
    })
}

pub fn two_day_itinerary() -> Value {
    json!({
        "summary": "Two days between shrines and markets",
        "days": [
            {
                "day": 1,
                "title": "Eastern Kyoto",
                "activities": [
                    {
                        "time": "9:00 AM",
                        "activity": "Fushimi Inari",
                        "description": "Walk the torii gates before the crowds",
                        "tip": "Go early",
                        "estimatedCost": "Free"
                    }
                ]
            },
            {
                "day": 2,
                "title": "Nishiki and Gion",
                "activities": [
                    {
                        "time": "11:00 AM",
                        "activity": "Nishiki Market",
                        "description": "Graze through the stalls",
                        "estimatedCost": "$30"
                    }
                ]
            }
        ],
        "packingTips": ["Comfortable shoes", "Cash"],
        "budgetBreakdown": {
            "accommodation": "$150/night",
            "food": "$60/day",
            "activities": "$40 total",
            "transportation": "$20 total"
        }
    })
}
