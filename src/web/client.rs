//! Fire-and-forget reporting to the magic backend

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};
use crate::api::{ProgressReport, StoryReport, PROGRESS_PATH, STORY_PATH};
use crate::config::BackendConfig;
use super::dom;

/// POST `body` as JSON and resolve to the response, whatever its status
pub(crate) async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let response = JsFuture::from(dom::window()?.fetch_with_request(&request)).await?;
    response.dyn_into::<Response>()
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    user_id: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn report_progress(&self, report: &ProgressReport) {
        self.send(PROGRESS_PATH, report);
    }

    pub fn report_story(&self, report: &StoryReport) {
        self.send(STORY_PATH, report);
    }

    /// Never blocks and never fails the caller; errors become one log line
    fn send<T: Serialize>(&self, path: &str, payload: &T) {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Backend offline: could not encode {}: {}", path, e);
                return;
            }
        };
        let url = format!("{}{}", self.base_url, path);

        spawn_local(async move {
            match post_json(&url, &body).await {
                Ok(response) if response.ok() => log::debug!("Reported to {}", url),
                Ok(response) => log::warn!("Backend offline: {} returned {}", url, response.status()),
                Err(e) => log::warn!("Backend offline: {:?}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = BackendClient::new(&BackendConfig {
            base_url: "http://localhost:5000/".into(),
            user_id: "demo_user".into(),
        });
        assert_eq!(client.base_url, "http://localhost:5000");
        assert_eq!(client.user_id(), "demo_user");
    }
}
