// src/lib.rs

pub mod affiliate;
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod services;
pub mod state;
pub mod wizard;

// Export commonly used items
pub use config::CONFIG;
pub use state::AppState;
pub use wizard::{Advance, TripPreferences, Wizard, WizardError};
