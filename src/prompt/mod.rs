// src/prompt/mod.rs
// Prompt construction for the generation flows
//
// itinerary.rs  - the wizard's prompt compiler (downstream contract)
// internal.rs   - fixed system instructions and secondary prompts

pub mod internal;
pub mod itinerary;

pub use itinerary::{
    DEFAULT_TRIP_DAYS, NONE_SPECIFIED, NOT_SPECIFIED, compile, trip_duration,
};
