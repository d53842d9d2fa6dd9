// src/prompt/internal.rs
// System instructions and secondary prompts sent alongside user content
//
// The itinerary prompt itself lives in itinerary.rs; these are the fixed
// instructions each generation flow pairs it with.

use super::itinerary::NOT_SPECIFIED;

/// System instruction for itinerary generation
pub const ITINERARY_SYSTEM_PROMPT: &str = "You are a travel expert specialising in Sardinia. \
Build the itinerary the traveler asks for, including specific activities, landmarks, \
and estimated time for each activity. Put the itinerary in markdown format.";

/// System instruction for the destination recommender
pub const RECOMMENDATION_SYSTEM_PROMPT: &str = "You recommend Sardinian destinations. \
Reply with a JSON array of destination names and nothing else.";

/// System instruction for the travel-assistant chat
pub const CHAT_SYSTEM_PROMPT: &str = "You are Sardin.ai, a friendly Sardinian travel assistant. \
Answer questions about Sardinia: beaches, food, transport, culture, festivals and \
archaeological sites. Keep answers practical and concise.";

/// First assistant message shown when a chat opens
pub const CHAT_GREETING: &str = "Hi! I'm your Sardinian travel assistant. Ask me anything \
about Sardinia - from hidden beaches to local cuisine, I'm here to help!";

/// Example questions a chat front end can cycle through as placeholders
pub const CHAT_EXAMPLE_QUESTIONS: [&str; 10] = [
    "What are the best hidden beaches in Sardinia?",
    "Tell me about traditional Sardinian cuisine",
    "How to get from Cagliari to Alghero?",
    "What's the best time to visit Sardinia?",
    "Recommend a 7-day itinerary for first-time visitors",
    "Where can I find authentic Sardinian crafts?",
    "What are the must-see archaeological sites?",
    "Best places for sunset views in Sardinia?",
    "How to experience local festivals?",
    "Tips for traveling with kids in Sardinia?",
];

fn or_not_specified(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { NOT_SPECIFIED } else { trimmed }
}

/// Prompt for the destination recommender
pub fn build_recommendation_prompt(interests: &str, budget: &str, time_of_year: &str) -> String {
    format!(
        "Based on the user's travel preferences, recommend a few destinations.\n\n\
         Interests: {}\n\
         Budget: {}\n\
         Time of Year: {}\n\n\
         Destinations:",
        or_not_specified(interests),
        or_not_specified(budget),
        or_not_specified(time_of_year),
    )
}
