//! Focus Sprints Frontend App
//!
//! Main application component: tab navigation over the task list, the
//! kanban board and the focus timer. Tasks live in the global store; the
//! board owns its own signal inside the board component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{provide_board_context, AppView, FocusTimer, KanbanBoard, TabNav, TaskList};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
    let (active_view, set_active_view) = signal(AppView::Tasks);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    // Board signals and global DnD listeners must outlive tab switches
    provide_board_context();

    // Load tasks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading tasks, trigger={}", trigger).into());
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", loaded.len()).into());
                    store.tasks().set(loaded);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Task load failed: {}", err).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Focus Sprints"</h1>
                <TabNav active_view=active_view set_active_view=set_active_view />
            </header>

            <main class="main-content">
                {move || match active_view.get() {
                    AppView::Tasks => view! { <TaskList /> }.into_any(),
                    AppView::Board => view! { <KanbanBoard /> }.into_any(),
                    AppView::Focus => view! { <FocusTimer /> }.into_any(),
                }}
            </main>
        </div>
    }
}
