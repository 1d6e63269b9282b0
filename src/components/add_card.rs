//! Add Card Form Component
//!
//! Per-column form for creating cards. Creation goes through the sync
//! controller gateway-first: the server assigns the id, then the card
//! appears at the end of its column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use kanban_core::{Board, CardDraft, Priority};

use crate::sync::board_controller;

/// Form for creating a card in one column
#[component]
pub fn AddCard(
    column_id: String,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
    set_sync_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(String::from("medium"));

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let mut draft = CardDraft::new(text.trim(), column_id.clone());
        draft.priority = Priority::from_str(&priority.get());

        set_title.set(String::new());
        set_open.set(false);
        spawn_local(async move {
            let current = board.get_untracked();
            if let Err(err) = board_controller(set_board).create_card(&current, &draft).await {
                web_sys::console::log_1(&format!("[BOARD] Create failed: {}", err).into());
                set_sync_error.set(Some(format!("Card not created: {}", err)));
            }
        });
    };

    view! {
        <div class="add-card">
            {move || if open.get() {
                let create = create.clone();
                view! {
                    <form class="add-card-form" on:submit=create>
                        <input
                            type="text"
                            placeholder="Card title..."
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        <select
                            prop:value=move || priority.get()
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                set_priority.set(select.value());
                            }
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                        <button type="submit">"Add"</button>
                        <button type="button" on:click=move |_| set_open.set(false)>"Cancel"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="add-card-btn" on:click=move |_| set_open.set(true)>
                        "+ Add card"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
