//! Session Persistence
//!
//! localStorage wrapper for the session tokens. Only the tokens are
//! persisted; the profile is refetched on resume.

use leptos::logging::warn;

use crate::config;
use crate::models::Session;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn save_session(session: &Session) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(config::SESSION_STORAGE_KEY, &json).is_err() {
                warn!("[storage] failed to persist session");
            }
        }
        Err(e) => warn!("[storage] failed to serialize session: {e}"),
    }
}

pub fn load_session() -> Option<Session> {
    let json = local_storage()?.get_item(config::SESSION_STORAGE_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!("[storage] discarding unreadable session: {e}");
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(config::SESSION_STORAGE_KEY);
    }
}
