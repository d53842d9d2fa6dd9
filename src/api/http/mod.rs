// src/api/http/mod.rs

pub mod assistant;
pub mod auth;
pub mod health;
pub mod itinerary;
pub mod wizard;

pub use assistant::create_assistant_router;
pub use auth::create_auth_router;
pub use health::health_check;
pub use itinerary::create_itinerary_router;
pub use wizard::create_catalog_router;
