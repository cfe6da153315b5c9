//! Everything about the congratulatory message that does not need a network:
//! the prompt, the wire types of the generative API, and the fallbacks.

use serde::{Deserialize, Serialize};

use crate::constants::{
    FORTUNE_EMPTY_FALLBACK, FORTUNE_ERROR_FALLBACK, FORTUNE_MODEL, FORTUNE_TEMPERATURE,
};
use crate::error::FortuneError;

pub fn prompt(prize_label: &str) -> String {
    format!(
        "You are a representative for Giorgio Armani. \
         The user just won a \"{}\" on a luxury lucky spin wheel. \
         Give them a short, sophisticated message (max 2 sentences) in Indonesian about how they can use this voucher to elevate their style with Armani's timeless elegance. \
         Keep the tone very formal, luxurious, and refined.",
        prize_label
    )
}

pub fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim_end_matches('/'),
        model
    )
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn for_prize(prize_label: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt(prize_label)) }],
            }],
            generation_config: GenerationConfig { temperature: FORTUNE_TEMPERATURE },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty when there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

pub fn decode_response(body: &str) -> Result<String, FortuneError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    Ok(response.text())
}

pub fn default_model() -> &'static str {
    FORTUNE_MODEL
}

/// Turns whatever the teller produced into something safe to show.
pub fn resolve(result: Result<String, FortuneError>) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            log::debug!("Fortune service returned no text, using fallback");
            FORTUNE_EMPTY_FALLBACK.to_string()
        }
        Err(e) => {
            log::warn!("Fortune request failed: {}", e);
            FORTUNE_ERROR_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_prize() {
        let text = prompt("700K");
        assert!(text.contains("\"700K\""));
        assert!(text.contains("Indonesian"));
    }

    #[test]
    fn test_request_wire_shape() {
        let body = serde_json::to_value(GenerateContentRequest::for_prize("500K")).unwrap();
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("500K"));
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_decode_joins_parts_of_first_candidate() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"Selamat "},{"text":"atas voucher Anda."}]}},
            {"content":{"parts":[{"text":"ignored"}]}}
        ]}"#;
        assert_eq!(decode_response(body).unwrap(), "Selamat atas voucher Anda.");
    }

    #[test]
    fn test_decode_without_candidates_is_empty() {
        assert_eq!(decode_response(r#"{"promptFeedback":{}}"#).unwrap(), "");
        assert!(matches!(decode_response("not json"), Err(FortuneError::Decode(_))));
    }

    #[test]
    fn test_resolve_fallbacks() {
        assert_eq!(resolve(Ok("  Bravo.  ".to_string())), "Bravo.");
        assert_eq!(resolve(Ok("   ".to_string())), FORTUNE_EMPTY_FALLBACK);
        assert_eq!(resolve(Err(FortuneError::Status(500))), FORTUNE_ERROR_FALLBACK);
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://generativelanguage.googleapis.com/", default_model()),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
