//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod card_cmd;
mod task_cmd;

pub use card_cmd::*;
pub use task_cmd::*;
