// src/wizard/preferences.rs
// Form state collected by the trip wizard

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::persona::PersonaId;

/// Raised when a label does not name one of an enum's choices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct InvalidChoice {
    pub kind: &'static str,
    pub value: String,
}

/// Lowercase and drop everything that is not alphanumeric, so that
/// "Food/Wine", "food wine" and "FoodWine" all compare equal.
fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Declares a closed choice set whose wire form is its display label.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label, also used on the wire
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidChoice;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| normalize_label(choice.label()) == wanted)
                    .ok_or_else(|| InvalidChoice {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

choice_enum! {
    /// How the traveler gets around the island
    TransportMode, "transport mode" {
        Car => "Car",
        PublicTransport => "Public Transport",
        Undecided => "Undecided",
    }
}

choice_enum! {
    GroupType, "group type" {
        Solo => "Solo",
        Couple => "Couple",
        Family => "Family",
        GroupOfFriends => "Group of Friends",
    }
}

choice_enum! {
    /// Fixed interest vocabulary. Declaration order is the render order.
    Interest, "interest" {
        Beaches => "Beaches",
        Hiking => "Hiking",
        Archaeology => "Archaeology",
        FoodWine => "Food/Wine",
        Nightlife => "Nightlife",
        Kitesurfing => "Kitesurfing",
        LocalCulture => "Local Culture",
    }
}

choice_enum! {
    Pace, "pace" {
        Relaxed => "Relaxed",
        Balanced => "Balanced",
        Packed => "Packed",
    }
}

const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse the date/time shapes a browser or terminal user sends:
/// `2024-06-15`, `2024-06-15T10:30`, `2024-06-15 10:30`, with optional seconds.
pub fn parse_datetime_input(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    const FORMATS: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

mod datetime_input {
    use super::{INPUT_DATETIME_FORMAT, parse_datetime_input};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(INPUT_DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_datetime_input(s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date/time: {s}"))),
        }
    }
}

/// Arrival/departure pair. Either endpoint may be missing, and an inverted
/// range (departure before arrival) is stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, with = "datetime_input")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, with = "datetime_input")]
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

/// A single typed change to the form state
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Arrival(NaiveDateTime),
    Departure(NaiveDateTime),
    Location(String),
    TransportMode(TransportMode),
    GroupType(GroupType),
    ToggleInterest(Interest),
    Pace(Pace),
    DailyBudget(String),
    DietaryNeeds(String),
    Mobility(String),
    CulturalDepth(bool),
    CrowdAvoidance(bool),
    Language(bool),
    MustSees(String),
    Avoids(String),
    SpecialRequests(String),
    WorkNeeds(String),
    Kitesurfing(bool),
}

/// Everything the traveler has told the wizard so far.
///
/// Wire format uses camelCase names (`dateRange`, `transportMode`, ...).
/// Unknown or missing fields deserialize to their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPreferences {
    // Core travel details
    pub date_range: DateRange,
    pub location: String,
    pub transport_mode: Option<TransportMode>,

    // Traveler profile
    pub group_type: Option<GroupType>,
    pub interests: BTreeSet<Interest>,
    pub pace: Option<Pace>,

    // Budget & practicalities
    pub daily_budget: String,
    pub dietary_needs: String,
    pub mobility: String,

    // Sardinian nuances
    pub cultural_depth: bool,
    pub crowd_avoidance: bool,
    pub language: bool,

    // Experience customization
    pub must_sees: String,
    pub avoids: String,
    pub special_requests: String,

    // Digital nomad add-ons
    pub work_needs: String,
    pub kitesurfing: bool,

    pub selected_persona: Option<PersonaId>,
    pub freeform_notes: String,
}

impl TripPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
    }

    pub fn set_arrival(&mut self, arrival: NaiveDateTime) {
        self.date_range.from = Some(arrival);
    }

    pub fn set_departure(&mut self, departure: NaiveDateTime) {
        self.date_range.to = Some(departure);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_transport_mode(&mut self, mode: TransportMode) {
        self.transport_mode = Some(mode);
    }

    pub fn set_group_type(&mut self, group: GroupType) {
        self.group_type = Some(group);
    }

    /// Add the interest if absent, remove it if present.
    /// Returns whether the interest is selected afterwards.
    pub fn toggle_interest(&mut self, interest: Interest) -> bool {
        if self.interests.remove(&interest) {
            false
        } else {
            self.interests.insert(interest);
            true
        }
    }

    pub fn set_pace(&mut self, pace: Pace) {
        self.pace = Some(pace);
    }

    pub fn set_daily_budget(&mut self, budget: impl Into<String>) {
        self.daily_budget = budget.into();
    }

    pub fn set_dietary_needs(&mut self, needs: impl Into<String>) {
        self.dietary_needs = needs.into();
    }

    pub fn set_mobility(&mut self, mobility: impl Into<String>) {
        self.mobility = mobility.into();
    }

    pub fn set_cultural_depth(&mut self, enabled: bool) {
        self.cultural_depth = enabled;
    }

    pub fn set_crowd_avoidance(&mut self, enabled: bool) {
        self.crowd_avoidance = enabled;
    }

    pub fn set_language(&mut self, enabled: bool) {
        self.language = enabled;
    }

    pub fn set_must_sees(&mut self, places: impl Into<String>) {
        self.must_sees = places.into();
    }

    pub fn set_avoids(&mut self, places: impl Into<String>) {
        self.avoids = places.into();
    }

    pub fn set_special_requests(&mut self, requests: impl Into<String>) {
        self.special_requests = requests.into();
    }

    pub fn set_work_needs(&mut self, needs: impl Into<String>) {
        self.work_needs = needs.into();
    }

    pub fn set_kitesurfing(&mut self, enabled: bool) {
        self.kitesurfing = enabled;
    }

    pub fn set_selected_persona(&mut self, persona: PersonaId) {
        self.selected_persona = Some(persona);
    }

    pub fn set_freeform_notes(&mut self, notes: impl Into<String>) {
        self.freeform_notes = notes.into();
    }

    /// Apply one typed edit. No cross-field validation happens here.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Arrival(dt) => self.set_arrival(dt),
            FieldEdit::Departure(dt) => self.set_departure(dt),
            FieldEdit::Location(v) => self.set_location(v),
            FieldEdit::TransportMode(v) => self.set_transport_mode(v),
            FieldEdit::GroupType(v) => self.set_group_type(v),
            FieldEdit::ToggleInterest(v) => {
                self.toggle_interest(v);
            }
            FieldEdit::Pace(v) => self.set_pace(v),
            FieldEdit::DailyBudget(v) => self.set_daily_budget(v),
            FieldEdit::DietaryNeeds(v) => self.set_dietary_needs(v),
            FieldEdit::Mobility(v) => self.set_mobility(v),
            FieldEdit::CulturalDepth(v) => self.set_cultural_depth(v),
            FieldEdit::CrowdAvoidance(v) => self.set_crowd_avoidance(v),
            FieldEdit::Language(v) => self.set_language(v),
            FieldEdit::MustSees(v) => self.set_must_sees(v),
            FieldEdit::Avoids(v) => self.set_avoids(v),
            FieldEdit::SpecialRequests(v) => self.set_special_requests(v),
            FieldEdit::WorkNeeds(v) => self.set_work_needs(v),
            FieldEdit::Kitesurfing(v) => self.set_kitesurfing(v),
        }
    }
}
