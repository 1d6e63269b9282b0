//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The kanban
//! board keeps its own signal inside the board component; the store
//! holds the task list and the energy selection shared between the task
//! and focus views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// All tasks
    pub tasks: Vec<Task>,
    /// Energy level driving task recommendations ("high"/"medium"/"low")
    pub selected_energy: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_energy: "medium".to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task to the store
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated_task: Task) {
    store.tasks().write().iter_mut()
        .find(|task| task.id == updated_task.id)
        .map(|task| *task = updated_task);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: i64) {
    store.tasks().write().retain(|task| task.id != task_id);
}
