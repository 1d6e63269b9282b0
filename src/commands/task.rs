//! Task Commands
//!
//! Frontend bindings for task backend commands.

use serde::Serialize;

use super::{invoke, js_error};
use crate::models::Task;
use wasm_bindgen::JsValue;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    #[serde(rename = "energyLevel")]
    pub energy_level: Option<&'a str>,
    pub category: Option<&'a str>,
    #[serde(rename = "estimatedMinutes")]
    pub estimated_minutes: Option<i32>,
}

#[derive(Serialize, Default)]
pub struct UpdateTaskArgs {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "energyLevel", skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(rename = "estimatedMinutes", skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i32>,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("list_tasks", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_task", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_task(args: &UpdateTaskArgs) -> Result<Task, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_task", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_task(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_task", js_args).await.map_err(js_error)?;
    Ok(())
}
