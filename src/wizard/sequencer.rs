// src/wizard/sequencer.rs
// Linear step sequencer that owns the form state

use tracing::debug;

use super::error::{WizardError, WizardResult};
use super::preferences::{FieldEdit, TripPreferences};
use super::steps::{StepDefinition, StepKind, steps};
use crate::persona::PersonaId;
use crate::prompt::itinerary;

pub const FREE_INPUT_REQUIRED: &str = "Please tell us about your dream holiday";

/// Outcome of a successful `advance()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward one step
    Moved { from: usize, to: usize },
    /// Already on the last step; the index did not change and the prompt was
    /// compiled from the current form state instead.
    AtTerminal { prompt: String },
}

/// A single traveler's pass through the step table.
///
/// `current` is always within `0..steps.len()`.
#[derive(Debug, Clone)]
pub struct Wizard {
    steps: &'static [StepDefinition],
    current: usize,
    preferences: TripPreferences,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            steps: steps(),
            current: 0,
            preferences: TripPreferences::new(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        self.steps
    }

    pub fn current_step(&self) -> &'static StepDefinition {
        &self.steps[self.current]
    }

    pub fn is_terminal(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// One-based position for "Step 3 of 8" style displays
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.steps.len())
    }

    pub fn preferences(&self) -> &TripPreferences {
        &self.preferences
    }

    pub fn set_freeform_notes(&mut self, notes: impl Into<String>) {
        self.preferences.set_freeform_notes(notes);
    }

    /// Apply a typed field edit to the form state
    pub fn edit(&mut self, edit: FieldEdit) {
        debug!(step = self.current, ?edit, "Applying field edit");
        self.preferences.apply(edit);
    }

    /// Check the current step's completion rule.
    ///
    /// Structured form steps have no required fields.
    fn check_completion(&self) -> WizardResult<()> {
        match self.current_step().kind {
            StepKind::FreeInput { .. } if self.preferences.freeform_notes.trim().is_empty() => {
                Err(WizardError::validation(FREE_INPUT_REQUIRED))
            }
            _ => Ok(()),
        }
    }

    /// Move forward one step, or compile the prompt when on the last step.
    pub fn advance(&mut self) -> WizardResult<Advance> {
        self.check_completion()?;

        if self.is_terminal() {
            debug!(step = self.current, "Advance on terminal step, compiling prompt");
            return Ok(Advance::AtTerminal {
                prompt: self.compile_prompt(),
            });
        }

        let from = self.current;
        self.current += 1;
        debug!(from, to = self.current, "Wizard advanced");
        Ok(Advance::Moved {
            from,
            to: self.current,
        })
    }

    /// Move back one step. No-op on the first step. Returns the new index.
    pub fn retreat(&mut self) -> usize {
        if self.current > 0 {
            self.current -= 1;
            debug!(to = self.current, "Wizard retreated");
        }
        self.current
    }

    /// Record the persona and advance immediately; the persona step has no
    /// separate confirm action.
    pub fn select_persona(&mut self, persona: PersonaId) -> WizardResult<Advance> {
        let step = self.current_step();
        if !matches!(step.kind, StepKind::PersonaChoice { .. }) {
            return Err(WizardError::WrongStep {
                index: self.current,
                title: step.title,
                expected: "persona",
            });
        }

        self.preferences.set_selected_persona(persona);
        self.advance()
    }

    /// Render the prompt for the current form state without moving
    pub fn compile_prompt(&self) -> String {
        let persona = self.preferences.selected_persona.map(|id| id.persona());
        itinerary::compile(&self.preferences, persona)
    }
}
