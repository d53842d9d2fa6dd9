// src/wizard/steps.rs
// Static step table for the trip wizard
//
// The table is declared once at build time and never mutated. Renderers
// (HTTP, CLI) walk it to decide what to ask; the sequencer walks it to decide
// which completion rule applies.

use serde::Serialize;

use super::error::WizardError;
use super::preferences::{
    FieldEdit, GroupType, Interest, Pace, TransportMode, TripPreferences, parse_datetime_input,
};
use crate::persona::{PERSONAS, Persona};

/// Identifies one field of the form state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Arrival,
    Departure,
    Location,
    TransportMode,
    GroupType,
    Interests,
    Pace,
    DailyBudget,
    DietaryNeeds,
    Mobility,
    CulturalDepth,
    CrowdAvoidance,
    Language,
    MustSees,
    Avoids,
    SpecialRequests,
    WorkNeeds,
    Kitesurfing,
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

impl FieldId {
    /// Turn raw user text into a typed edit for this field.
    ///
    /// Multi-select fields take one choice per call and produce a toggle.
    pub fn parse_edit(&self, raw: &str) -> Result<FieldEdit, WizardError> {
        let value = raw.trim();
        let invalid = |reason: String| WizardError::InvalidField {
            field: self.descriptor_label(),
            reason,
        };

        let edit = match self {
            FieldId::Arrival | FieldId::Departure => {
                let dt = parse_datetime_input(value).ok_or_else(|| {
                    invalid(format!("'{value}' is not a date (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM)"))
                })?;
                if *self == FieldId::Arrival {
                    FieldEdit::Arrival(dt)
                } else {
                    FieldEdit::Departure(dt)
                }
            }
            FieldId::TransportMode => FieldEdit::TransportMode(
                value.parse::<TransportMode>().map_err(|e| invalid(e.to_string()))?,
            ),
            FieldId::GroupType => FieldEdit::GroupType(
                value.parse::<GroupType>().map_err(|e| invalid(e.to_string()))?,
            ),
            FieldId::Interests => FieldEdit::ToggleInterest(
                value.parse::<Interest>().map_err(|e| invalid(e.to_string()))?,
            ),
            FieldId::Pace => {
                FieldEdit::Pace(value.parse::<Pace>().map_err(|e| invalid(e.to_string()))?)
            }
            FieldId::CulturalDepth | FieldId::CrowdAvoidance | FieldId::Language | FieldId::Kitesurfing => {
                let flag = parse_toggle(value)
                    .ok_or_else(|| invalid(format!("'{value}' is not yes or no")))?;
                match self {
                    FieldId::CulturalDepth => FieldEdit::CulturalDepth(flag),
                    FieldId::CrowdAvoidance => FieldEdit::CrowdAvoidance(flag),
                    FieldId::Language => FieldEdit::Language(flag),
                    _ => FieldEdit::Kitesurfing(flag),
                }
            }
            FieldId::Location => FieldEdit::Location(value.to_string()),
            FieldId::DailyBudget => FieldEdit::DailyBudget(value.to_string()),
            FieldId::DietaryNeeds => FieldEdit::DietaryNeeds(value.to_string()),
            FieldId::Mobility => FieldEdit::Mobility(value.to_string()),
            FieldId::MustSees => FieldEdit::MustSees(value.to_string()),
            FieldId::Avoids => FieldEdit::Avoids(value.to_string()),
            FieldId::SpecialRequests => FieldEdit::SpecialRequests(value.to_string()),
            FieldId::WorkNeeds => FieldEdit::WorkNeeds(value.to_string()),
        };

        Ok(edit)
    }

    /// Current value of this field, formatted for display. Empty when unset.
    pub fn display_value(&self, prefs: &TripPreferences) -> String {
        let label = |v: Option<&'static str>| v.unwrap_or_default().to_string();
        match self {
            FieldId::Arrival => prefs
                .date_range
                .from
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            FieldId::Departure => prefs
                .date_range
                .to
                .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            FieldId::Location => prefs.location.clone(),
            FieldId::TransportMode => label(prefs.transport_mode.map(|v| v.label())),
            FieldId::GroupType => label(prefs.group_type.map(|v| v.label())),
            FieldId::Interests => prefs
                .interests
                .iter()
                .map(Interest::label)
                .collect::<Vec<_>>()
                .join(", "),
            FieldId::Pace => label(prefs.pace.map(|v| v.label())),
            FieldId::DailyBudget => prefs.daily_budget.clone(),
            FieldId::DietaryNeeds => prefs.dietary_needs.clone(),
            FieldId::Mobility => prefs.mobility.clone(),
            FieldId::CulturalDepth => yes_no(prefs.cultural_depth),
            FieldId::CrowdAvoidance => yes_no(prefs.crowd_avoidance),
            FieldId::Language => yes_no(prefs.language),
            FieldId::MustSees => prefs.must_sees.clone(),
            FieldId::Avoids => prefs.avoids.clone(),
            FieldId::SpecialRequests => prefs.special_requests.clone(),
            FieldId::WorkNeeds => prefs.work_needs.clone(),
            FieldId::Kitesurfing => yes_no(prefs.kitesurfing),
        }
    }

    /// Label of the descriptor that owns this field
    pub fn descriptor_label(&self) -> &'static str {
        STEPS
            .iter()
            .filter_map(|step| match step.kind {
                StepKind::StructuredForm { fields } => Some(fields),
                _ => None,
            })
            .flatten()
            .find(|field| field.id == *self)
            .map(|field| field.label)
            .unwrap_or("field")
    }
}

/// Input widget for a structured-form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    Text { placeholder: &'static str },
    #[serde(rename = "datetime-local")]
    DateTime { placeholder: &'static str },
    Select { options: &'static [&'static str] },
    MultiSelect { options: &'static [&'static str] },
    Toggle { description: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    #[serde(rename = "name")]
    pub id: FieldId,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StepKind {
    FreeInput {
        placeholder: &'static str,
    },
    #[serde(rename = "persona")]
    PersonaChoice {
        options: &'static [Persona],
    },
    #[serde(rename = "form")]
    StructuredForm {
        fields: &'static [FieldDescriptor],
    },
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::FreeInput { .. } => "free-input",
            StepKind::PersonaChoice { .. } => "persona",
            StepKind::StructuredForm { .. } => "form",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDefinition {
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: StepKind,
}

const TRANSPORT_OPTIONS: &[&str] = &["Car", "Public Transport", "Undecided"];
const GROUP_OPTIONS: &[&str] = &["Solo", "Couple", "Family", "Group of Friends"];
const INTEREST_OPTIONS: &[&str] = &[
    "Beaches",
    "Hiking",
    "Archaeology",
    "Food/Wine",
    "Nightlife",
    "Kitesurfing",
    "Local Culture",
];
const PACE_OPTIONS: &[&str] = &["Relaxed", "Balanced", "Packed"];
const BUDGET_OPTIONS: &[&str] = &["€50", "€100", "€200+"];

const CORE_DETAILS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::Arrival,
        label: "When do you arrive?",
        kind: FieldKind::DateTime {
            placeholder: "Include flight/train times if known",
        },
    },
    FieldDescriptor {
        id: FieldId::Departure,
        label: "When do you depart?",
        kind: FieldKind::DateTime {
            placeholder: "Include flight/train times if known",
        },
    },
    FieldDescriptor {
        id: FieldId::Location,
        label: "Which town are you staying in?",
        kind: FieldKind::Text {
            placeholder: "e.g., Alghero, Cagliari, Olbia",
        },
    },
    FieldDescriptor {
        id: FieldId::TransportMode,
        label: "Transport Mode",
        kind: FieldKind::Select {
            options: TRANSPORT_OPTIONS,
        },
    },
];

const TRAVELER_PROFILE: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::GroupType,
        label: "Group Type",
        kind: FieldKind::Select {
            options: GROUP_OPTIONS,
        },
    },
    FieldDescriptor {
        id: FieldId::Interests,
        label: "Interests",
        kind: FieldKind::MultiSelect {
            options: INTEREST_OPTIONS,
        },
    },
    FieldDescriptor {
        id: FieldId::Pace,
        label: "Preferred Pace",
        kind: FieldKind::Select {
            options: PACE_OPTIONS,
        },
    },
];

const PRACTICALITIES: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::DailyBudget,
        label: "Daily Budget",
        kind: FieldKind::Select {
            options: BUDGET_OPTIONS,
        },
    },
    FieldDescriptor {
        id: FieldId::DietaryNeeds,
        label: "Dietary Needs",
        kind: FieldKind::Text {
            placeholder: "e.g., Gluten-free, vegan, etc.",
        },
    },
    FieldDescriptor {
        id: FieldId::Mobility,
        label: "Accessibility Needs",
        kind: FieldKind::Text {
            placeholder: "e.g., wheelchair-friendly routes",
        },
    },
];

const NUANCES: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::CulturalDepth,
        label: "Experience authentic Sardinian traditions?",
        kind: FieldKind::Toggle {
            description: "e.g., shepherd's lunch, cantu a tenore concerts",
        },
    },
    FieldDescriptor {
        id: FieldId::CrowdAvoidance,
        label: "Prefer hidden gems?",
        kind: FieldKind::Toggle {
            description: "Or don't mind tourist hotspots?",
        },
    },
    FieldDescriptor {
        id: FieldId::Language,
        label: "Learn Sardinian phrases?",
        kind: FieldKind::Toggle {
            description: "Get local language tips during your trip",
        },
    },
];

const CUSTOMIZATION: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::MustSees,
        label: "Must-See Places",
        kind: FieldKind::Text {
            placeholder: "e.g., Su Nuraxi, La Pelosa beach",
        },
    },
    FieldDescriptor {
        id: FieldId::Avoids,
        label: "Places to Avoid",
        kind: FieldKind::Text {
            placeholder: "e.g., wineries, crowded areas",
        },
    },
    FieldDescriptor {
        id: FieldId::SpecialRequests,
        label: "Special Requests",
        kind: FieldKind::Text {
            placeholder: "e.g., sunrise hikes, cooking classes",
        },
    },
];

const NOMAD_ADD_ONS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::WorkNeeds,
        label: "Work Needs",
        kind: FieldKind::Text {
            placeholder: "e.g., reliable wifi, coworking spaces",
        },
    },
    FieldDescriptor {
        id: FieldId::Kitesurfing,
        label: "Kitesurfing sessions?",
        kind: FieldKind::Toggle {
            description: "Add wind-dependent kitesurf spots to free afternoons",
        },
    },
];

pub static STEPS: [StepDefinition; 8] = [
    StepDefinition {
        title: "Tell us about your dream holiday",
        kind: StepKind::FreeInput {
            placeholder: "I want to explore hidden beaches and enjoy local cuisine...",
        },
    },
    StepDefinition {
        title: "Choose your travel style",
        kind: StepKind::PersonaChoice { options: &PERSONAS },
    },
    StepDefinition {
        title: "Core Travel Details",
        kind: StepKind::StructuredForm {
            fields: CORE_DETAILS,
        },
    },
    StepDefinition {
        title: "Traveler Profile",
        kind: StepKind::StructuredForm {
            fields: TRAVELER_PROFILE,
        },
    },
    StepDefinition {
        title: "Budget & Practicalities",
        kind: StepKind::StructuredForm {
            fields: PRACTICALITIES,
        },
    },
    StepDefinition {
        title: "Sardinian Nuances",
        kind: StepKind::StructuredForm { fields: NUANCES },
    },
    StepDefinition {
        title: "Experience Customization",
        kind: StepKind::StructuredForm {
            fields: CUSTOMIZATION,
        },
    },
    StepDefinition {
        title: "Digital Nomad Add-Ons",
        kind: StepKind::StructuredForm {
            fields: NOMAD_ADD_ONS,
        },
    },
];

/// The wizard's step table
pub fn steps() -> &'static [StepDefinition] {
    &STEPS
}
