use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use crate::config::SceneConfig;
use crate::store::{find_realm, AppState, MOODS, REALMS};
use super::client::BackendClient;
use super::gemini::compose_story;

/// Page-wide visitor state with backend reporting
#[wasm_bindgen]
pub struct MagicStore {
    state: AppState,
    client: BackendClient,
}

#[wasm_bindgen]
impl MagicStore {
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: &str) -> Result<MagicStore, JsValue> {
        let config = SceneConfig::from_yaml(config_yaml).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            state: AppState::new(),
            client: BackendClient::new(&config.backend),
        })
    }

    /// Enter a realm and report the new meter; unknown ids are ignored
    pub fn enter_realm(&mut self, realm_id: &str) -> bool {
        if find_realm(realm_id).is_none() {
            log::warn!("Unknown realm '{}'", realm_id);
            return false;
        }
        let report = self.state.enter_realm(realm_id, self.client.user_id());
        self.client.report_progress(&report);
        true
    }

    pub fn set_mood(&mut self, mood: &str) {
        self.state.set_mood(mood);
    }

    pub fn set_kid_mode(&mut self, kid_mode: bool) {
        self.state.set_kid_mode(kid_mode);
    }

    /// Tell a story for the chosen mood and realm, then report it
    ///
    /// Resolves to the text shown, or `undefined` until both are chosen.
    #[wasm_bindgen(js_name = generateStory)]
    pub fn generate_story(&self, api_key: String) -> js_sys::Promise {
        let prompt = self.state.story_prompt();
        let state = self.state.clone();
        let client = self.client.clone();
        future_to_promise(async move {
            let Some(prompt) = prompt else {
                return Ok(JsValue::UNDEFINED);
            };
            let story = compose_story(&api_key, prompt).await;
            client.report_story(&state.story_report(client.user_id(), &story));
            Ok(JsValue::from_str(&story))
        })
    }

    #[wasm_bindgen(getter)]
    pub fn magic_meter(&self) -> u32 {
        self.state.magic_meter
    }

    #[wasm_bindgen(getter)]
    pub fn kid_mode(&self) -> bool {
        self.state.kid_mode
    }

    #[wasm_bindgen(getter)]
    pub fn current_realm(&self) -> Option<String> {
        self.state.current_realm.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mood(&self) -> Option<String> {
        self.state.mood.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn can_generate_story(&self) -> bool {
        self.state.can_generate_story()
    }

    pub fn realm_ids() -> Vec<String> {
        REALMS.iter().map(|r| r.id.to_string()).collect()
    }

    pub fn moods() -> Vec<String> {
        MOODS.iter().map(|m| m.to_string()).collect()
    }
}
