//! Story prompt and Gemini `generateContent` wire format

use serde::{Deserialize, Serialize};

pub const MODEL: &str = "gemini-1.5-flash";
pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown when no API key was configured
pub const MISSING_KEY_STORY: &str =
    "The magic crystals are dim... (Please add a Gemini API key to enable story generation).";
/// Shown when the request or its response failed
pub const INTERRUPTED_STORY: &str =
    "A spell was interrupted! The magic faded before the story could be told.";

const KID_STYLE: &str = "Very simple, bright, and easy for a 5-year-old child to read.";
const ADULT_STYLE: &str =
    "Poetic, slightly mysterious, and emotionally resonant for an older audience.";

pub fn build_prompt(mood: &str, kid_mode: bool, realm: &str) -> String {
    let style = if kid_mode { KID_STYLE } else { ADULT_STYLE };
    format!(
        "You are a magical Disney storyteller.\n\
         Write a 3-sentence, enchanting and emotional short story.\n\
         Theme/Realm: {realm}\n\
         User Mood: {mood}\n\
         Style: {style}\n\n\
         Focus on creating an atmospheric, immersive feeling. Do not start with \"Once upon a time\"."
    )
}

pub fn endpoint(api_key: &str) -> String {
    format!("{API_BASE}/{MODEL}:generateContent?key={api_key}")
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Content,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode request: {}", e))
    }
}

/// Text of the first candidate
pub fn parse_response(body: &str) -> Result<String, String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| format!("Malformed response: {}", e))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or("Response has no candidates")?;

    let text: String = candidate.content.parts.into_iter().map(|p| p.text).collect();
    let text = text.trim();
    if text.is_empty() {
        return Err("Candidate has no text".to_string());
    }
    Ok(text.to_string())
}

/// Fold a generation outcome into the text shown to the reader
pub fn story_or_fallback(result: Result<String, String>) -> String {
    match result {
        Ok(story) => story,
        Err(e) => {
            log::error!("Story generation failed: {}", e);
            INTERRUPTED_STORY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_styles() {
        let kid = build_prompt("Happy", true, "ocean");
        assert!(kid.contains("Theme/Realm: ocean"));
        assert!(kid.contains("User Mood: Happy"));
        assert!(kid.contains("5-year-old"));

        let adult = build_prompt("Dreamy", false, "space");
        assert!(adult.contains("Poetic"));
        assert!(!adult.contains("5-year-old"));
        assert!(adult.contains("Do not start with \"Once upon a time\""));
    }

    #[test]
    fn test_request_body() {
        let json = GenerateRequest::from_prompt("hi".into()).to_json().unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hi"}]}]}"#);
    }

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Stars hummed. "}, {"text": "The sea listened."}], "role": "model"},
                 "finishReason": "STOP"}
            ],
            "usageMetadata": {"totalTokenCount": 42}
        }"#;
        assert_eq!(parse_response(body).unwrap(), "Stars hummed. The sea listened.");
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_response("not json").is_err());
        assert!(parse_response(r#"{"candidates": []}"#).is_err());
        assert!(parse_response(r#"{"error": {"code": 400}}"#).is_err());
        assert!(parse_response(r#"{"candidates": [{"content": {"parts": []}}]}"#).is_err());
    }

    #[test]
    fn test_fallback() {
        assert_eq!(story_or_fallback(Err("boom".into())), INTERRUPTED_STORY);
        assert_eq!(story_or_fallback(Ok("tale".into())), "tale");
    }
}
