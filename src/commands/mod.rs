//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.
//! The catch variant of invoke is used so backend `Err(String)` values
//! come back as `Err` here instead of aborting the wasm module.

mod card;
mod task;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend command errors arrive as a JS string
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use card::*;
pub use task::*;
