//! Seed Fetch
//!
//! One-shot read-only fetch of a small starter batch of todos, used
//! only when no persisted state exists. Never retried; a failure is
//! logged by the caller and the collection is left alone.

use crate::models::Todo;

/// Fixed seed endpoint, capped at five records (used only in wasm32)
#[allow(dead_code)]
const SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos?_limit=5";

#[cfg(target_arch = "wasm32")]
pub async fn fetch_seed() -> Result<Vec<Todo>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(SEED_URL, &opts)
        .map_err(|e| format!("request error: {:?}", e))?;

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response")?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| format!("json promise error: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("json error: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("deserialize error: {}", e))
}

/// Native stub: there is no browser fetch off wasm
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_seed() -> Result<Vec<Todo>, String> {
    Err("seed fetch requires a browser environment".to_string())
}
