//! Visitor state shared across the page

use crate::api::{ProgressReport, StoryReport};
use crate::story;

pub const MAX_MAGIC: u32 = 100;
/// Magic awarded for entering a realm
pub const REALM_BONUS: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Realm {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Card gradient, from and to
    pub colors: (&'static str, &'static str),
}

pub const REALMS: [Realm; 4] = [
    Realm { id: "fantasy", name: "Fantasy Realm", icon: "🧚", colors: ("#ec4899", "#a855f7") },
    Realm { id: "ocean", name: "Ocean Realm", icon: "🌊", colors: ("#60a5fa", "#06b6d4") },
    Realm { id: "space", name: "Space Realm", icon: "🚀", colors: ("#4f46e5", "#6b21a8") },
    Realm { id: "adventure", name: "Adventure Realm", icon: "🗺️", colors: ("#22c55e", "#047857") },
];

pub const MOODS: [&str; 5] = ["Happy", "Curious", "Brave", "Dreamy", "Mischievous"];

pub fn find_realm(id: &str) -> Option<&'static Realm> {
    REALMS.iter().find(|r| r.id == id)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub kid_mode: bool,
    pub magic_meter: u32,
    pub current_realm: Option<String>,
    pub mood: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kid_mode(&mut self, kid_mode: bool) {
        self.kid_mode = kid_mode;
    }

    /// Adds magic, saturating at `MAX_MAGIC`
    pub fn increment_magic_meter(&mut self, amount: u32) {
        self.magic_meter = self.magic_meter.saturating_add(amount).min(MAX_MAGIC);
    }

    pub fn set_current_realm(&mut self, realm: Option<&str>) {
        self.current_realm = realm.map(str::to_string);
    }

    pub fn set_mood(&mut self, mood: &str) {
        self.mood = Some(mood.to_string());
    }

    /// Enter a realm, award the exploration bonus and build the report to send
    pub fn enter_realm(&mut self, realm_id: &str, user_id: &str) -> ProgressReport {
        self.set_current_realm(Some(realm_id));
        self.increment_magic_meter(REALM_BONUS);
        self.progress_report(user_id)
    }

    pub fn progress_report(&self, user_id: &str) -> ProgressReport {
        ProgressReport {
            user_id: Some(user_id.to_string()),
            magic_meter: Some(f64::from(self.magic_meter)),
            current_realm: self.current_realm.clone(),
        }
    }

    /// A story needs both a mood and a realm
    pub fn can_generate_story(&self) -> bool {
        self.mood.is_some() && self.current_realm.is_some()
    }

    /// Storyteller prompt for the chosen mood and realm
    pub fn story_prompt(&self) -> Option<String> {
        match (&self.mood, &self.current_realm) {
            (Some(mood), Some(realm)) => Some(story::build_prompt(mood, self.kid_mode, realm)),
            _ => None,
        }
    }

    /// Report for a story just shown to the visitor, fallback lines included
    pub fn story_report(&self, user_id: &str, story: &str) -> StoryReport {
        StoryReport::new(user_id, self.mood.as_deref().unwrap_or_default(), story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_saturates() {
        let mut state = AppState::new();
        for _ in 0..10 {
            state.increment_magic_meter(30);
        }
        assert_eq!(state.magic_meter, MAX_MAGIC);
        state.increment_magic_meter(u32::MAX);
        assert_eq!(state.magic_meter, MAX_MAGIC);
    }

    #[test]
    fn test_enter_realm() {
        let mut state = AppState::new();
        let report = state.enter_realm("ocean", "demo_user");
        assert_eq!(state.current_realm.as_deref(), Some("ocean"));
        assert_eq!(state.magic_meter, 25);
        assert_eq!(report.magic_meter, Some(25.0));
        assert_eq!(report.current_realm.as_deref(), Some("ocean"));
        assert_eq!(report.user_id.as_deref(), Some("demo_user"));

        state.enter_realm("space", "demo_user");
        assert_eq!(state.magic_meter, 50);
    }

    #[test]
    fn test_story_needs_mood_and_realm() {
        let mut state = AppState::new();
        assert!(!state.can_generate_story());
        state.set_mood(MOODS[2]);
        assert!(!state.can_generate_story());
        state.set_current_realm(Some("fantasy"));
        assert!(state.can_generate_story());
    }

    #[test]
    fn test_fallback_story_is_still_reported() {
        let mut state = AppState::new();
        assert_eq!(state.story_prompt(), None);

        state.set_kid_mode(true);
        state.set_mood("Brave");
        state.set_current_realm(Some("ocean"));
        let prompt = state.story_prompt().unwrap();
        assert!(prompt.contains("Theme/Realm: ocean"));
        assert!(prompt.contains("5-year-old"));

        let report = state.story_report("demo_user", story::MISSING_KEY_STORY);
        assert_eq!(report, StoryReport::new("demo_user", "Brave", story::MISSING_KEY_STORY));

        let told = story::story_or_fallback(Err("offline".into()));
        let report = state.story_report("demo_user", &told);
        assert_eq!(report.generated_story.as_deref(), Some(story::INTERRUPTED_STORY));
        assert_eq!(report.user_id.as_deref(), Some("demo_user"));
    }

    #[test]
    fn test_realm_lookup() {
        assert_eq!(find_realm("adventure").map(|r| r.icon), Some("🗺️"));
        assert!(find_realm("atlantis").is_none());
    }
}
