//! Card Commands
//!
//! Frontend bindings for kanban card backend commands.

use std::collections::HashMap;

use serde::Serialize;

use super::{invoke, js_error};
use crate::models::KanbanCard;
use wasm_bindgen::JsValue;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub column: &'a str,
    pub priority: Option<&'a str>,
    pub color: Option<&'a str>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<&'a str>,
    pub labels: Option<&'a [String]>,
}

#[derive(Serialize, Default)]
pub struct UpdateCardArgs {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Empty string clears the date
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

#[derive(Serialize)]
struct MoveCardArgs<'a> {
    id: i64,
    column: &'a str,
}

// ========================
// Commands
// ========================

/// Full board state keyed by column id
pub async fn list_cards() -> Result<HashMap<String, Vec<KanbanCard>>, String> {
    let result = invoke("list_cards", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_card(args: &CreateCardArgs<'_>) -> Result<KanbanCard, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_card", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_card(args: &UpdateCardArgs) -> Result<KanbanCard, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_card", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn move_card(id: i64, column: &str) -> Result<KanbanCard, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&MoveCardArgs { id, column }).map_err(|e| e.to_string())?;
    let result = invoke("move_card", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_card(id: i64) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_card", js_args).await.map_err(js_error)?;
    Ok(())
}
