use wasm_bindgen_futures::JsFuture;
use crate::story::{self, GenerateRequest, MISSING_KEY_STORY};
use super::client::post_json;

async fn request_story(api_key: &str, prompt: String) -> Result<String, String> {
    let body = GenerateRequest::from_prompt(prompt).to_json()?;
    let response = post_json(&story::endpoint(api_key), &body)
        .await
        .map_err(|e| format!("Request failed: {:?}", e))?;
    if !response.ok() {
        return Err(format!("Gemini returned {}", response.status()));
    }

    let text = response.text().map_err(|e| format!("{:?}", e))?;
    let text = JsFuture::from(text).await.map_err(|e| format!("{:?}", e))?;
    let text = text.as_string().ok_or("Response body is not text")?;
    story::parse_response(&text)
}

/// Story text for `prompt`
///
/// Always displayable: a missing key or any failure yields one of the
/// fallback lines.
pub(crate) async fn compose_story(api_key: &str, prompt: String) -> String {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return MISSING_KEY_STORY.to_string();
    }
    story::story_or_fallback(request_story(api_key, prompt).await)
}
