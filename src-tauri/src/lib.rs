//! Focus Sprints Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;

mod commands;
mod domain;
mod repository;

use repository::{init_db, CardRepository, TaskRepository};

/// Application state shared across commands
pub struct AppState {
    pub card_repo: Arc<CardRepository>,
    pub task_repo: Arc<TaskRepository>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            rolling_logger::init_logger(app.path().app_log_dir()?, "FocusSprints")?;

            let app_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&app_dir)?;
            let db_path = app_dir.join("focus_sprints.db");
            log::info!("Opening database at {}", db_path.display());

            let db_state = tauri::async_runtime::block_on(init_db(&db_path))?;
            let conn = Arc::new(Mutex::new(db_state.connection()));
            app.manage(AppState {
                card_repo: Arc::new(CardRepository::new(conn.clone())),
                task_repo: Arc::new(TaskRepository::new(conn)),
            });
            // Keep the database handle alive for the app's lifetime
            app.manage(db_state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_cards,
            commands::create_card,
            commands::update_card,
            commands::move_card,
            commands::delete_card,
            commands::list_tasks,
            commands::create_task,
            commands::update_task,
            commands::delete_task,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
