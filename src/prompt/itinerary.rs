// src/prompt/itinerary.rs
// Compiles the wizard's form state into the itinerary prompt
//
// The section headers and line order below are consumed downstream; keep
// them stable. Empty fields always render a fallback phrase so no line ends
// in an empty gap.

use chrono::NaiveDateTime;

use crate::persona::Persona;
use crate::wizard::preferences::{DateRange, Interest, TripPreferences};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NONE_SPECIFIED: &str = "None specified";

/// Trip length used when either travel date is missing
pub const DEFAULT_TRIP_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Trip length in days: ceiling of the absolute difference between the two
/// dates, or `DEFAULT_TRIP_DAYS` when either endpoint is missing.
pub fn trip_duration(range: &DateRange) -> i64 {
    match (range.from, range.to) {
        (Some(from), Some(to)) => {
            let millis = (to - from).num_milliseconds().abs();
            (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
        }
        _ => DEFAULT_TRIP_DAYS,
    }
}

fn or_not_specified(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED
    } else {
        trimmed
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn format_date(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn format_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

fn format_interests(prefs: &TripPreferences) -> String {
    if prefs.interests.is_empty() {
        return NONE_SPECIFIED.to_string();
    }
    prefs
        .interests
        .iter()
        .map(Interest::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the itinerary prompt.
///
/// Pure: reads its inputs only, and identical inputs give byte-identical
/// output. `persona` is passed separately so callers can resolve it from any
/// source (form state, request body); `None` renders as "Not specified".
pub fn compile(prefs: &TripPreferences, persona: Option<&Persona>) -> String {
    let duration = trip_duration(&prefs.date_range);
    let interests = format_interests(prefs);

    let traveler = prefs
        .group_type
        .map(|g| format!("a {}", g.label().to_lowercase()))
        .unwrap_or_else(|| "a traveler".to_string());
    let base = if prefs.location.trim().is_empty() {
        "Sardinia"
    } else {
        prefs.location.trim()
    };

    let travel_style = persona
        .map(|p| format!("{} ({})", p.name, p.description))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let language = if prefs.language {
        "Include Sardinian dialect phrases for greetings"
    } else {
        "No language learning required"
    };

    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Generate a {duration}-day Sardinian itinerary for {traveler} staying in {base}.\n\n"
    ));

    prompt.push_str("## Trip Overview\n");
    prompt.push_str(&format!(
        "Trip description: {}\n",
        or_not_specified(&prefs.freeform_notes)
    ));
    prompt.push_str(&format!("Travel style: {travel_style}\n"));
    prompt.push_str(&format!(
        "Travel dates: {} to {}\n",
        format_date(prefs.date_range.from),
        format_date(prefs.date_range.to)
    ));
    prompt.push_str(&format!("Trip length: {}\n", format_days(duration)));
    prompt.push_str(&format!(
        "Transport mode: {}\n\n",
        prefs.transport_mode.map(|m| m.label()).unwrap_or(NOT_SPECIFIED)
    ));

    prompt.push_str("## Traveler Profile\n");
    prompt.push_str(&format!(
        "Group type: {}\n",
        prefs.group_type.map(|g| g.label()).unwrap_or(NOT_SPECIFIED)
    ));
    prompt.push_str(&format!("Interests: {interests}\n"));
    prompt.push_str(&format!(
        "Preferred pace: {}\n\n",
        prefs.pace.map(|p| p.label()).unwrap_or(NOT_SPECIFIED)
    ));

    prompt.push_str("## Budget & Practicalities\n");
    prompt.push_str(&format!(
        "Daily budget: {}\n",
        or_not_specified(&prefs.daily_budget)
    ));
    prompt.push_str(&format!(
        "Dietary needs: {}\n",
        or_not_specified(&prefs.dietary_needs)
    ));
    prompt.push_str(&format!(
        "Accessibility needs: {}\n\n",
        or_not_specified(&prefs.mobility)
    ));

    prompt.push_str("## Sardinian Nuances\n");
    prompt.push_str(&format!(
        "Authentic traditions: {}\n",
        yes_no(prefs.cultural_depth)
    ));
    prompt.push_str(&format!(
        "Avoid crowded spots: {}\n",
        yes_no(prefs.crowd_avoidance)
    ));
    prompt.push_str(&format!("Language: {language}\n"));
    prompt.push_str(&format!("Kitesurfing: {}\n\n", yes_no(prefs.kitesurfing)));

    prompt.push_str("## Experience Customization\n");
    prompt.push_str(&format!(
        "Must-see places: {}\n",
        or_not_specified(&prefs.must_sees)
    ));
    prompt.push_str(&format!(
        "Places to avoid: {}\n",
        or_not_specified(&prefs.avoids)
    ));
    prompt.push_str(&format!(
        "Special requests: {}\n",
        or_not_specified(&prefs.special_requests)
    ));
    prompt.push_str(&format!(
        "Work needs: {}\n\n",
        or_not_specified(&prefs.work_needs)
    ));

    prompt.push_str("## Output Format\n");
    prompt.push_str(&format!("Prioritize: {interests}.\n"));
    prompt.push_str("Detail transportation between activities (max 30min drives).\n");
    prompt.push_str("Format: Morning/Afternoon/Evening with time estimates.\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{self, PersonaId};
    use crate::wizard::preferences::{GroupType, parse_datetime_input};

    fn date(raw: &str) -> NaiveDateTime {
        parse_datetime_input(raw).unwrap()
    }

    #[test]
    fn duration_counts_whole_days() {
        let range = DateRange::new(date("2024-06-15"), date("2024-06-22"));
        assert_eq!(trip_duration(&range), 7);
    }

    #[test]
    fn duration_rounds_partial_days_up() {
        let range = DateRange::new(date("2024-06-15T10:00"), date("2024-06-17T09:00"));
        assert_eq!(trip_duration(&range), 2);

        let range = DateRange::new(date("2024-06-15T10:00"), date("2024-06-17T11:00"));
        assert_eq!(trip_duration(&range), 3);
    }

    #[test]
    fn duration_defaults_when_an_endpoint_is_missing() {
        assert_eq!(trip_duration(&DateRange::default()), DEFAULT_TRIP_DAYS);
        let half = DateRange {
            from: Some(date("2024-06-15")),
            to: None,
        };
        assert_eq!(trip_duration(&half), DEFAULT_TRIP_DAYS);
        let other_half = DateRange {
            from: None,
            to: Some(date("2024-06-15")),
        };
        assert_eq!(trip_duration(&other_half), DEFAULT_TRIP_DAYS);
    }

    #[test]
    fn inverted_range_uses_absolute_difference() {
        let range = DateRange::new(date("2024-06-22"), date("2024-06-15"));
        assert_eq!(trip_duration(&range), 7);
    }

    #[test]
    fn family_trip_scenario() {
        let mut prefs = TripPreferences::new();
        prefs.set_group_type(GroupType::Family);
        prefs.set_location("Alghero");
        prefs.toggle_interest(Interest::Hiking);
        prefs.toggle_interest(Interest::Beaches);
        prefs.set_date_range(DateRange::new(date("2024-06-15"), date("2024-06-22")));
        prefs.set_freeform_notes("sun and sea");

        let prompt = compile(&prefs, persona::lookup("adventurer"));

        assert!(prompt.contains("Family"));
        assert!(prompt.contains("Alghero"));
        assert!(prompt.contains("Beaches, Hiking"));
        assert!(prompt.contains("7 days"));
        assert!(prompt.contains("The Adventurer"));
        assert!(prompt.starts_with(
            "Generate a 7-day Sardinian itinerary for a family staying in Alghero."
        ));
    }

    #[test]
    fn empty_form_renders_fallbacks() {
        let mut prefs = TripPreferences::new();
        prefs.set_freeform_notes("beach trip");

        let prompt = compile(&prefs, None);

        assert!(prompt.contains("Trip description: beach trip\n"));
        assert!(prompt.contains("Travel style: Not specified\n"));
        assert!(prompt.contains("Travel dates: Not specified to Not specified\n"));
        assert!(prompt.contains("Transport mode: Not specified\n"));
        assert!(prompt.contains("Group type: Not specified\n"));
        assert!(prompt.contains("Interests: None specified\n"));
        assert!(prompt.contains("Preferred pace: Not specified\n"));
        assert!(prompt.contains("Daily budget: Not specified\n"));
        assert!(prompt.contains("Dietary needs: Not specified\n"));
        assert!(prompt.contains("Accessibility needs: Not specified\n"));
        assert!(prompt.contains("Must-see places: Not specified\n"));
        assert!(prompt.contains("Places to avoid: Not specified\n"));
        assert!(prompt.contains("Special requests: Not specified\n"));
        assert!(prompt.contains("Work needs: Not specified\n"));
        assert!(prompt.contains("Prioritize: None specified.\n"));
        assert!(prompt.contains("Trip length: 7 days\n"));
        assert!(!prompt.contains(": \n"));
    }

    #[test]
    fn compile_is_deterministic() {
        let mut prefs = TripPreferences::new();
        prefs.toggle_interest(Interest::Nightlife);
        prefs.toggle_interest(Interest::Archaeology);
        prefs.set_language(true);
        let twin = prefs.clone();
        let persona = Some(PersonaId::CultureSeeker.persona());

        assert_eq!(compile(&prefs, persona), compile(&twin, persona));
        assert_eq!(compile(&prefs, persona), compile(&prefs, persona));
    }

    #[test]
    fn interest_order_ignores_selection_order() {
        let mut a = TripPreferences::new();
        a.toggle_interest(Interest::Hiking);
        a.toggle_interest(Interest::Beaches);
        let mut b = TripPreferences::new();
        b.toggle_interest(Interest::Beaches);
        b.toggle_interest(Interest::Hiking);

        assert_eq!(compile(&a, None), compile(&b, None));
    }

    #[test]
    fn toggles_render_as_words() {
        let mut prefs = TripPreferences::new();
        prefs.set_language(true);
        prefs.set_crowd_avoidance(true);

        let prompt = compile(&prefs, None);
        assert!(prompt.contains("Avoid crowded spots: Yes\n"));
        assert!(prompt.contains("Authentic traditions: No\n"));
        assert!(prompt.contains("Language: Include Sardinian dialect phrases for greetings\n"));
    }

    #[test]
    fn single_day_is_singular() {
        let mut prefs = TripPreferences::new();
        prefs.set_date_range(DateRange::new(date("2024-06-15T08:00"), date("2024-06-15T20:00")));
        let prompt = compile(&prefs, None);
        assert!(prompt.contains("Trip length: 1 day\n"));
        assert!(prompt.starts_with("Generate a 1-day"));
    }
}
