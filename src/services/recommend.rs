// src/services/recommend.rs
// Destination recommendations from interests, budget and season

use std::sync::Arc;

use tracing::{debug, error};

use super::error::{GenerationError, GenerationResult};
use crate::llm::{LlmProvider, Message};
use crate::prompt::internal::{RECOMMENDATION_SYSTEM_PROMPT, build_recommendation_prompt};

pub const NO_DESTINATIONS: &str = "No destinations recommended based on your preferences.";

pub struct RecommendationService {
    provider: Arc<dyn LlmProvider>,
}

impl RecommendationService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub async fn recommend(
        &self,
        interests: &str,
        budget: &str,
        time_of_year: &str,
    ) -> GenerationResult<Vec<String>> {
        let prompt = build_recommendation_prompt(interests, budget, time_of_year);

        let response = self
            .provider
            .chat(
                vec![Message::user(prompt)],
                RECOMMENDATION_SYSTEM_PROMPT.to_string(),
            )
            .await
            .map_err(|e| {
                error!("Recommendation request failed: {:#}", e);
                GenerationError::provider(e)
            })?;

        let destinations = parse_destinations(&response.content);
        debug!("Parsed {} destinations", destinations.len());

        if destinations.is_empty() {
            return Err(GenerationError::Empty(NO_DESTINATIONS));
        }
        Ok(destinations)
    }
}

/// Accepts a JSON string array (optionally fenced) or a plain list, one
/// destination per line with bullets or numbering stripped
pub fn parse_destinations(text: &str) -> Vec<String> {
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if start < end {
            if let Ok(items) = serde_json::from_str::<Vec<String>>(&text[start..=end]) {
                return items
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', '•']).trim_start();
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return stripped.trim();
        }
    }
    line.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_array() {
        assert_eq!(
            parse_destinations(r#"["Cala Goloritzè", " Bosa ", ""]"#),
            vec!["Cala Goloritzè", "Bosa"]
        );
    }

    #[test]
    fn parses_fenced_json() {
        let text = "```json\n[\"Alghero\", \"Cagliari\"]\n```";
        assert_eq!(parse_destinations(text), vec!["Alghero", "Cagliari"]);
    }

    #[test]
    fn parses_bulleted_and_numbered_lists() {
        let text = "- Alghero\n* Cagliari\n\n1. Nuoro\n2) Olbia\n";
        assert_eq!(
            parse_destinations(text),
            vec!["Alghero", "Cagliari", "Nuoro", "Olbia"]
        );
    }

    #[test]
    fn numbers_without_markers_are_kept() {
        assert_eq!(parse_destinations("3 Nuraghi Route"), vec!["3 Nuraghi Route"]);
    }

    #[test]
    fn blank_response_gives_nothing() {
        assert!(parse_destinations("  \n ").is_empty());
    }
}
