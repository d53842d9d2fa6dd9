// src/persona/mod.rs
// Traveler personas offered on the "Choose your travel style" step.
//
// This table is the single source of truth for persona ids, display names
// and descriptions. The prompt compiler, the HTTP layer and the CLI all read
// from here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of persona identifiers.
///
/// Serialized as the short wire ids (`adventurer`, `culture`, `relaxation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersonaId {
    #[serde(rename = "adventurer")]
    Adventurer,
    #[serde(rename = "culture")]
    CultureSeeker,
    #[serde(rename = "relaxation")]
    RelaxationLover,
}

impl PersonaId {
    pub const ALL: [PersonaId; 3] = [
        PersonaId::Adventurer,
        PersonaId::CultureSeeker,
        PersonaId::RelaxationLover,
    ];

    /// Wire id for this persona
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Adventurer => "adventurer",
            PersonaId::CultureSeeker => "culture",
            PersonaId::RelaxationLover => "relaxation",
        }
    }

    /// Registry entry for this persona
    pub fn persona(&self) -> &'static Persona {
        match self {
            PersonaId::Adventurer => &PERSONAS[0],
            PersonaId::CultureSeeker => &PERSONAS[1],
            PersonaId::RelaxationLover => &PERSONAS[2],
        }
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown persona: {0}")]
pub struct UnknownPersona(pub String);

impl std::str::FromStr for PersonaId {
    type Err = UnknownPersona;

    /// Parse a wire id. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventurer" => Ok(PersonaId::Adventurer),
            "culture" => Ok(PersonaId::CultureSeeker),
            "relaxation" => Ok(PersonaId::RelaxationLover),
            _ => Err(UnknownPersona(s.to_string())),
        }
    }
}

/// A traveler archetype with its static display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: &'static str,
    pub description: &'static str,
}

pub static PERSONAS: [Persona; 3] = [
    Persona {
        id: PersonaId::Adventurer,
        name: "The Adventurer",
        description: "Hiking, diving, and outdoor activities",
    },
    Persona {
        id: PersonaId::CultureSeeker,
        name: "The Culture Seeker",
        description: "History, traditions, and local experiences",
    },
    Persona {
        id: PersonaId::RelaxationLover,
        name: "The Relaxation Lover",
        description: "Beaches, spas, and peaceful retreats",
    },
];

/// All personas, in display order
pub fn all() -> &'static [Persona] {
    &PERSONAS
}

/// Look up a persona by wire id. Unknown ids return `None`.
pub fn lookup(id: &str) -> Option<&'static Persona> {
    id.parse::<PersonaId>().ok().map(|id| id.persona())
}
