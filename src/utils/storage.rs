use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// Single fixed key holding the JSON-serialized session (`user` + `token`).
pub const SESSION_KEY: &str = "perf_console_session";

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value).map_err(|e| format!("Error writing {} to localStorage: {}", key, e))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

/// Raw string read, for values that must be validated before deserializing.
pub fn load_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

/// Wipe local storage entirely. Logout clears everything, not just the
/// session key.
pub fn clear_storage() {
    LocalStorage::clear();
}
