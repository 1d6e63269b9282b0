//! Add Column Form Component
//!
//! Creates a client-side column. The server never stores columns, so the
//! id is slugged from the title and only cards moved into the column make
//! it outlive a reload.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use kanban_core::Board;

/// Derive a column id from its display title
fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Form for adding a column to the board
#[component]
pub fn AddColumn(set_board: WriteSignal<Board>) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        let id = slugify(&text);
        if id.is_empty() {
            return;
        }
        let mut added = false;
        set_board.update(|b| {
            added = b.add_column(id.clone(), text.trim());
        });
        if added {
            set_title.set(String::new());
            set_error.set(None);
            set_open.set(false);
        } else {
            set_error.set(Some(format!("Column \"{}\" already exists", id)));
        }
    };

    view! {
        <div class="add-column">
            {move || if open.get() {
                view! {
                    <form class="add-column-form" on:submit=create>
                        <input
                            type="text"
                            placeholder="Column title..."
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        <button type="submit">"Add"</button>
                        <button type="button" on:click=move |_| set_open.set(false)>"Cancel"</button>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="add-column-btn" on:click=move |_| set_open.set(true)>
                        "+ Add column"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
