//! Tauri Commands for Kanban Cards
//!
//! Exposes the persistence gateway contract to the frontend via Tauri IPC:
//! list (grouped by column), create, partial update, move, delete.
//! DomainError is flattened to its Display string at this boundary.

use std::collections::HashMap;

use tauri::State;

use crate::domain::{DomainError, KanbanCard, Priority};
use crate::repository::Repository;
use crate::AppState;

/// Full board state, keyed by column id
#[tauri::command]
pub async fn list_cards(
    state: State<'_, AppState>,
) -> Result<HashMap<String, Vec<KanbanCard>>, String> {
    state.card_repo.list_grouped().await.map_err(|e| e.to_string())
}

/// Create a card; the database assigns the id
#[tauri::command]
pub async fn create_card(
    state: State<'_, AppState>,
    title: String,
    description: Option<String>,
    column: String,
    priority: Option<String>,
    color: Option<String>,
    due_date: Option<String>,
    labels: Option<Vec<String>>,
) -> Result<KanbanCard, String> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidInput("title is required".to_string()).to_string());
    }
    if column.trim().is_empty() {
        return Err(DomainError::InvalidInput("column is required".to_string()).to_string());
    }

    let mut card = KanbanCard::new(0, title, column);
    if let Some(description) = description {
        card.description = description;
    }
    if let Some(priority) = priority {
        card.priority = Priority::from_str(&priority);
    }
    if let Some(color) = color {
        card.color = color;
    }
    card.due_date = due_date;
    card.labels = labels.unwrap_or_default();

    log::info!("Creating card '{}' in column {}", card.title, card.column);
    state.card_repo.create(&card).await.map_err(|e| e.to_string())
}

/// Partial update. Absent fields are left untouched; an empty due_date
/// string clears the date.
#[tauri::command]
pub async fn update_card(
    state: State<'_, AppState>,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    column: Option<String>,
    priority: Option<String>,
    color: Option<String>,
    due_date: Option<String>,
    labels: Option<Vec<String>>,
) -> Result<KanbanCard, String> {
    let existing = state
        .card_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("card {}", id)).to_string())?;

    let updated = KanbanCard {
        id: existing.id,
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        column: column.unwrap_or(existing.column),
        priority: priority.map(|p| Priority::from_str(&p)).unwrap_or(existing.priority),
        color: color.unwrap_or(existing.color),
        due_date: match due_date {
            Some(date) if date.is_empty() => None,
            Some(date) => Some(date),
            None => existing.due_date,
        },
        labels: labels.unwrap_or(existing.labels),
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    state.card_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Persist a drag move
#[tauri::command]
pub async fn move_card(
    state: State<'_, AppState>,
    id: i64,
    column: String,
) -> Result<KanbanCard, String> {
    log::info!("Moving card {} to column {}", id, column);
    state
        .card_repo
        .set_column(id, &column)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a card
#[tauri::command]
pub async fn delete_card(state: State<'_, AppState>, id: i64) -> Result<(), String> {
    log::info!("Deleting card {}", id);
    state.card_repo.delete(id).await.map_err(|e| e.to_string())
}
