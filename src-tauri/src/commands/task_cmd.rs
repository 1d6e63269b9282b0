//! Tauri Commands for Tasks
//!
//! CRUD for the focus-sprint task list.

use tauri::State;

use crate::domain::{DomainError, EnergyLevel, Task};
use crate::repository::Repository;
use crate::AppState;

/// List all tasks
#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    state.task_repo.list().await.map_err(|e| e.to_string())
}

/// Create a new task
#[tauri::command]
pub async fn create_task(
    state: State<'_, AppState>,
    title: String,
    description: Option<String>,
    energy_level: Option<String>,
    category: Option<String>,
    estimated_minutes: Option<i32>,
) -> Result<Task, String> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidInput("title is required".to_string()).to_string());
    }

    let mut task = Task::new(
        0,
        title,
        energy_level.map(|e| EnergyLevel::from_str(&e)).unwrap_or_default(),
    );
    if let Some(description) = description {
        task.description = description;
    }
    if let Some(category) = category {
        task.category = category;
    }
    if let Some(minutes) = estimated_minutes {
        task.estimated_minutes = minutes;
    }

    state.task_repo.create(&task).await.map_err(|e| e.to_string())
}

/// Partial task update (toggle completion, edit fields)
#[tauri::command]
pub async fn update_task(
    state: State<'_, AppState>,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    energy_level: Option<String>,
    category: Option<String>,
    completed: Option<bool>,
    estimated_minutes: Option<i32>,
) -> Result<Task, String> {
    let existing = state
        .task_repo
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("task {}", id)).to_string())?;

    let updated = Task {
        id: existing.id,
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        energy_level: energy_level
            .map(|e| EnergyLevel::from_str(&e))
            .unwrap_or(existing.energy_level),
        category: category.unwrap_or(existing.category),
        completed: completed.unwrap_or(existing.completed),
        estimated_minutes: estimated_minutes.unwrap_or(existing.estimated_minutes),
        created_at: existing.created_at,
        updated_at: existing.updated_at,
    };

    state.task_repo.update(&updated).await.map_err(|e| e.to_string())
}

/// Delete a task
#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, id: i64) -> Result<(), String> {
    log::info!("Deleting task {}", id);
    state.task_repo.delete(id).await.map_err(|e| e.to_string())
}
