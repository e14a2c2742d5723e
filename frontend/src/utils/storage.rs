use serde::de::DeserializeOwned;
use web_sys::Storage;

pub fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window object".to_string())?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

/// Reads and decodes a JSON value persisted under `key`.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match read_item(key) {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| format!("Stored `{}` is not valid: {}", key, e)),
        None => Ok(None),
    }
}
