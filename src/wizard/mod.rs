// src/wizard/mod.rs
// Multi-step trip preference wizard: form state, step table, sequencer

pub mod error;
pub mod preferences;
pub mod sequencer;
pub mod steps;

pub use error::{WizardError, WizardResult};
pub use preferences::{
    DateRange, FieldEdit, GroupType, Interest, InvalidChoice, Pace, TransportMode,
    TripPreferences, parse_datetime_input,
};
pub use sequencer::{Advance, FREE_INPUT_REQUIRED, Wizard};
pub use steps::{FieldDescriptor, FieldId, FieldKind, StepDefinition, StepKind, steps};
