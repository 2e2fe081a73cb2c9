//! LocalStorage Persistence
//!
//! Saves and restores the whole todo collection as one JSON blob under
//! a fixed key. Writes are best-effort: a failed save is logged and
//! ignored, costing at most one reload's worth of changes.

use crate::models::Todo;

/// LocalStorage key (used only in wasm32)
#[allow(dead_code)]
const STORAGE_KEY: &str = "todos";

/// Read the persisted collection.
///
/// `None` means no usable state: key absent, storage unavailable, or
/// malformed data (logged and discarded). The caller falls back to the
/// seed fetch in that case.
#[cfg(target_arch = "wasm32")]
pub fn load() -> Option<Vec<Todo>> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;

    match storage.get_item(STORAGE_KEY) {
        Ok(Some(json)) => parse_saved(&json),
        _ => None,
    }
}

/// Write the full collection under the fixed key.
#[cfg(target_arch = "wasm32")]
pub fn save(todos: &[Todo]) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        match serde_json::to_string(todos) {
            Ok(json) => {
                if storage.set_item(STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to write todos to localStorage");
                }
            }
            Err(e) => log::warn!("Failed to serialize todos: {}", e),
        }
    } else {
        log::warn!("localStorage unavailable, todos not saved");
    }
}

/// Decode a persisted blob. Malformed data is logged and treated as
/// absent rather than crashing the app.
#[allow(dead_code)]
fn parse_saved(json: &str) -> Option<Vec<Todo>> {
    match serde_json::from_str(json) {
        Ok(todos) => Some(todos),
        Err(e) => {
            log::warn!("Discarding malformed saved todos: {}", e);
            None
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Option<Vec<Todo>> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_todos: &[Todo]) {
    // No-op off wasm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn serialized_collection_round_trips() {
        let todos = vec![
            make_todo(1, "A", false),
            make_todo(2, "B", true),
            make_todo(5, "C", false),
        ];

        let json = serde_json::to_string(&todos).unwrap();
        let restored = parse_saved(&json).unwrap();

        assert_eq!(restored, todos);
    }

    #[test]
    fn parse_accepts_the_documented_shape() {
        let restored =
            parse_saved(r#"[{"id":1,"title":"A","completed":false}]"#).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0], make_todo(1, "A", false));
    }

    #[test]
    fn parse_ignores_extra_fields_from_the_remote_shape() {
        let restored = parse_saved(
            r#"[{"userId":1,"id":3,"title":"seeded","completed":true}]"#,
        )
        .unwrap();

        assert_eq!(restored[0], make_todo(3, "seeded", true));
    }

    #[test]
    fn malformed_blob_is_treated_as_absent() {
        assert_eq!(parse_saved("not json"), None);
        assert_eq!(parse_saved("{\"id\":1}"), None);
        assert_eq!(parse_saved("[{\"id\":1}]"), None);
    }

    #[test]
    fn empty_array_is_still_valid_state() {
        assert_eq!(parse_saved("[]"), Some(Vec::new()));
    }
}
