// src/llm/provider/gemini/conversion.rs
// Message conversion and request body assembly for the Gemini API

use serde_json::{Value, json};

use crate::llm::provider::Message;

/// Convert our Message format to Gemini `contents`. System messages are
/// dropped here; they travel in `systemInstruction`.
pub fn messages_to_gemini_contents(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .filter_map(|msg| {
            let role = match msg.role.as_str() {
                "assistant" | "model" => "model",
                "system" => return None,
                _ => "user",
            };

            if msg.content.is_empty() {
                return None;
            }

            Some(json!({
                "role": role,
                "parts": [{"text": msg.content}]
            }))
        })
        .collect()
}

/// Collect the system prompt plus any inline system messages
fn system_text(messages: &[Message], system: &str) -> String {
    let mut sections: Vec<&str> = Vec::new();
    if !system.trim().is_empty() {
        sections.push(system);
    }
    sections.extend(
        messages
            .iter()
            .filter(|m| m.role == "system" && !m.content.trim().is_empty())
            .map(|m| m.content.as_str()),
    );
    sections.join("\n\n")
}

/// Full `generateContent` request body
pub fn build_request_body(messages: &[Message], system: &str, temperature: f32) -> Value {
    let mut body = json!({
        "contents": messages_to_gemini_contents(messages),
        "generationConfig": {
            "temperature": temperature
        }
    });

    let system = system_text(messages, system);
    if !system.is_empty() {
        body["systemInstruction"] = json!({
            "parts": [{"text": system}]
        });
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_roles_and_skips_system() {
        let messages = vec![
            Message::system("be brief"),
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user(""),
        ];
        let contents = messages_to_gemini_contents(&messages);

        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "hello");
    }

    #[test]
    fn request_body_carries_system_instruction() {
        let messages = vec![Message::system("inline"), Message::user("plan my trip")];
        let body = build_request_body(&messages, "You are a travel expert.", 0.5);

        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a travel expert.\n\ninline"
        );
        assert_eq!(body["contents"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn no_system_instruction_when_empty() {
        let body = build_request_body(&[Message::user("x")], "  ", 1.0);
        assert!(body.get("systemInstruction").is_none());
    }
}
