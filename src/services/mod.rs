pub mod completion;
pub mod extraction_service;
pub mod gateway;
pub mod itinerary_service;
pub mod prompt_service;
