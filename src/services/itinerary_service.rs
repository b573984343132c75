use crate::models::{itinerary::Itinerary, trip_request::TripRequest};
use crate::services::completion::{CompletionError, CompletionOperations};
use crate::services::extraction_service::ItineraryExtractor;
use crate::services::prompt_service::build_prompts;

/// Prompt, complete, extract. Holds no per-request state, so one instance
/// serves every request.
pub struct ItineraryService<C> {
    provider: C,
    extractor: ItineraryExtractor,
}

impl<C: CompletionOperations> ItineraryService<C> {
    pub fn new(provider: C, extractor: ItineraryExtractor) -> Self {
        Self {
            provider,
            extractor,
        }
    }

    pub fn provider(&self) -> &C {
        &self.provider
    }

    pub async fn generate(&self, request: &TripRequest) -> Result<Itinerary, CompletionError> {
        let prompts = build_prompts(request);
        let content = self.provider.complete(&prompts.system, &prompts.user).await?;
        Ok(self.extractor.extract(&content))
    }
}
