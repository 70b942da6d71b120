//! JSON bodies shared by the browser client and the backend
//!
//! Every field is optional and unknown fields are ignored. The backend
//! reads bodies as loose JSON and formats each field on its own, so one
//! bad field never hides the others.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROGRESS_PATH: &str = "/api/progress";
pub const STORY_PATH: &str = "/api/story";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressReport {
    pub user_id: Option<String>,
    pub magic_meter: Option<f64>,
    pub current_realm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryReport {
    pub user_id: Option<String>,
    pub mood: Option<String>,
    pub generated_story: Option<String>,
}

impl StoryReport {
    pub fn new(user_id: &str, mood: &str, story: &str) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            mood: Some(mood.to_string()),
            generated_story: Some(story.to_string()),
        }
    }
}

/// Acknowledgement returned by every endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Log line for a progress body, read field by field
pub fn progress_log_line(body: &Value) -> String {
    format!(
        "Saved progress for {}: Meter at {} in realm {}",
        field(body, "userId"),
        field(body, "magicMeter"),
        field(body, "currentRealm")
    )
}

pub fn story_log_line(body: &Value) -> String {
    format!("Saved story for {}", field(body, "userId"))
}

/// Absent fields print `undefined`, explicit nulls print `null`
fn field(body: &Value, name: &str) -> String {
    body.get(name).map_or_else(|| "undefined".to_string(), template_text)
}

/// How a JSON value reads when interpolated into a JS template string
fn template_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                v => template_text(v),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
