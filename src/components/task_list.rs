//! Task List Component
//!
//! Create, toggle, and delete focus-sprint tasks. Mutations go straight
//! to the backend; the store is patched in place on success instead of
//! re-listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateTaskArgs, UpdateTaskArgs};
use crate::models::{Task, ENERGY_LEVELS};
use crate::store::{store_add_task, store_remove_task, store_update_task, use_app_store, AppStateStoreFields};

/// Task list with creation form
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (new_energy, set_new_energy) = signal(String::from("medium"));
    let (new_minutes, set_new_minutes) = signal(String::from("25"));

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() {
            return;
        }
        let energy = new_energy.get();
        let minutes = new_minutes.get().parse::<i32>().ok();

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: title.trim(),
                description: None,
                energy_level: Some(&energy),
                category: None,
                estimated_minutes: minutes,
            };
            match commands::create_task(&args).await {
                Ok(task) => {
                    store_add_task(&store, task);
                    set_new_title.set(String::new());
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[TASKS] Create failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <div class="task-list">
            <form class="new-task-form" on:submit=create_task>
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_title.set(input.value());
                    }
                />
                <select
                    prop:value=move || new_energy.get()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_new_energy.set(select.value());
                    }
                >
                    {ENERGY_LEVELS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <input
                    type="number"
                    class="minutes-input"
                    min="5"
                    max="120"
                    prop:value=move || new_minutes.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_minutes.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <div class="task-rows">
                {move || store.tasks().get().into_iter().map(|task| view! {
                    <TaskRow task=task />
                }).collect_view()}
            </div>

            <p class="task-count">
                {move || {
                    let tasks = store.tasks().get();
                    let open = tasks.iter().filter(|t| !t.completed).count();
                    format!("{} open, {} total", open, tasks.len())
                }}
            </p>
        </div>
    }
}

/// A single task row
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();
    let energy = task.energy_level.clone();
    let minutes = task.estimated_minutes;

    let toggle = move |_| {
        spawn_local(async move {
            let args = UpdateTaskArgs {
                id,
                completed: Some(!completed),
                ..Default::default()
            };
            match commands::update_task(&args).await {
                Ok(updated) => store_update_task(&store, updated),
                Err(err) => {
                    web_sys::console::log_1(&format!("[TASKS] Toggle failed: {}", err).into());
                }
            }
        });
    };

    let delete = move |_| {
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(()) => store_remove_task(&store, id),
                Err(err) => {
                    web_sys::console::log_1(&format!("[TASKS] Delete failed: {}", err).into());
                }
            }
        });
    };

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            <input type="checkbox" checked=completed on:change=toggle />
            <span class="task-title">{title}</span>
            <span class=format!("energy-badge {}", energy)>{energy.clone()}</span>
            <span class="task-minutes">{format!("{} min", minutes)}</span>
            <button class="delete-btn" on:click=delete>"×"</button>
        </div>
    }
}
