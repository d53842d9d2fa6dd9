// src/services/mod.rs
// Generation flows built on the LLM provider

pub mod chat;
pub mod error;
pub mod itinerary;
pub mod recommend;

pub use chat::ChatService;
pub use error::{GENERIC_FAILURE, GenerationError, GenerationResult};
pub use itinerary::ItineraryService;
pub use recommend::{NO_DESTINATIONS, RecommendationService, parse_destinations};
