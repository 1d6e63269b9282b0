//! Kanban Column Component
//!
//! One column: draggable header, inline rename, delete, card list and the
//! add-card form. Column identity and order live client-side only, so
//! rename/delete/reorder mutate the board signal without a backend call.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use board_dnd::{make_on_mouseleave, make_on_mousedown, make_on_target_mouseenter};
use kanban_core::{Board, Column, DragItem, DropTarget};

use crate::components::kanban_board::BoardDnd;
use crate::components::{AddCard, KanbanCard};

/// A single board column
#[component]
pub fn KanbanColumn(
    column: Column,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
    dnd: BoardDnd,
    set_sync_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let column_id = column.id.clone();
    let title = column.title.clone();

    let (editing_title, set_editing_title) = signal(false);
    let (title_draft, set_title_draft) = signal(title.clone());
    let (confirm_delete, set_confirm_delete) = signal(false);

    // DnD: header drags the column, the whole column catches drops
    let on_mousedown = make_on_mousedown(
        dnd,
        DragItem::Column {
            column_id: column_id.clone(),
        },
    );
    let on_mouseenter = make_on_target_mouseenter(
        dnd,
        DropTarget::Column {
            column_id: column_id.clone(),
        },
    );
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_drop_target = {
        let column_id = column_id.clone();
        move || {
            matches!(
                dnd.drop_target_read.get(),
                Some(DropTarget::Column { column_id: ref tid }) if *tid == column_id
            )
        }
    };
    let is_dragging = {
        let column_id = column_id.clone();
        move || {
            matches!(
                dnd.dragging_read.get(),
                Some(DragItem::Column { column_id: ref did }) if *did == column_id
            )
        }
    };

    let column_class = move || {
        let mut c = String::from("kanban-column");
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        if is_dragging() {
            c.push_str(" dragging");
        }
        c
    };

    let save_title = {
        let column_id = column_id.clone();
        move || {
            let new_title = title_draft.get();
            if !new_title.trim().is_empty() {
                set_board.update(|b| {
                    b.rename_column(&column_id, new_title.trim());
                });
            }
            set_editing_title.set(false);
        }
    };

    let delete_column = {
        let column_id = column_id.clone();
        move |_| {
            if !confirm_delete.get() {
                set_confirm_delete.set(true);
                return;
            }
            set_board.update(|b| {
                b.remove_column(&column_id);
            });
        }
    };

    let card_count = column.cards.len();
    let cards = column.cards.clone();
    let add_card_column = column_id.clone();

    view! {
        <div
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="column-header" on:mousedown=on_mousedown>
                {move || if editing_title.get() {
                    let save = save_title.clone();
                    let save_on_enter = save_title.clone();
                    view! {
                        <input
                            type="text"
                            class="column-title-input"
                            prop:value=move || title_draft.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title_draft.set(input.value());
                            }
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save_on_enter();
                                }
                            }
                            on:blur=move |_| save()
                        />
                    }.into_any()
                } else {
                    let title = title_draft.get();
                    view! {
                        <span class="column-title-group">
                            <span
                                class="column-title"
                                on:dblclick=move |_| set_editing_title.set(true)
                            >
                                {title}
                            </span>
                            <span class="card-count">{card_count}</span>
                        </span>
                    }.into_any()
                }}
                <button
                    class=move || if confirm_delete.get() { "delete-btn confirm" } else { "delete-btn" }
                    on:click=delete_column
                    on:mouseleave=move |_| set_confirm_delete.set(false)
                >
                    {move || if confirm_delete.get() { "Delete?" } else { "×" }}
                </button>
            </div>

            <div class="column-cards">
                {cards.into_iter().map(|card| view! {
                    <KanbanCard
                        card=card
                        board=board
                        set_board=set_board
                        dnd=dnd
                        set_sync_error=set_sync_error
                    />
                }).collect_view()}
            </div>

            <AddCard column_id=add_card_column board=board set_board=set_board set_sync_error=set_sync_error />
        </div>
    }
}
