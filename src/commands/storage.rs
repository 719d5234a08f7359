//! localStorage Binding
//!
//! `KeyValueStorage` over `window.localStorage`.

use planner_core::{KeyValueStorage, PlannerError, PlannerResult};
use wasm_bindgen::JsValue;

/// The browser's localStorage. The handle is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn js_error(context: &str, err: JsValue) -> PlannerError {
    PlannerError::Storage(format!("{}: {:?}", context, err))
}

impl BrowserStorage {
    fn local_storage() -> PlannerResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| PlannerError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| js_error("localStorage unavailable", e))?
            .ok_or_else(|| PlannerError::Storage("localStorage disabled".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> PlannerResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| js_error("getItem failed", e))
    }

    fn set_item(&self, key: &str, value: &str) -> PlannerResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| js_error("setItem failed", e))
    }

    fn remove_item(&self, key: &str) -> PlannerResult<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| js_error("removeItem failed", e))
    }
}
