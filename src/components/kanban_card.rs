//! Kanban Card Component
//!
//! Card display plus an inline edit form. Edits and deletes go through
//! the sync controller, so the board updates optimistically and failures
//! surface in the board's error banner.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use board_dnd::{make_on_mouseleave, make_on_mousedown, make_on_target_mouseenter};
use kanban_core::{Board, Card, CardPatch, DragItem, DropTarget, Priority};

use crate::components::kanban_board::BoardDnd;
use crate::sync::board_controller;

/// Patch value for the due-date field. An empty input clears the date;
/// a date the picker can't produce (hand-typed garbage) leaves the
/// stored date untouched instead of wiping it.
fn due_date_patch(input: &str) -> Option<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Some(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_patch_keeps_stored_date_on_bad_input() {
        assert_eq!(due_date_patch("not-a-date"), None);
        assert_eq!(due_date_patch("2026-13-40"), None);
    }

    #[test]
    fn test_due_date_patch_clears_on_empty() {
        assert_eq!(due_date_patch(""), Some(None));
        assert_eq!(due_date_patch("  "), Some(None));
    }

    #[test]
    fn test_due_date_patch_parses_picker_format() {
        let expected = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        assert_eq!(due_date_patch("2026-09-01"), Some(Some(expected)));
    }
}

fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

/// A single card on the board
#[component]
pub fn KanbanCard(
    card: Card,
    board: ReadSignal<Board>,
    set_board: WriteSignal<Board>,
    dnd: BoardDnd,
    set_sync_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let card_id = card.id.clone();

    let (editing, set_editing) = signal(false);

    // Edit drafts, seeded from the card on each render
    let (title_draft, set_title_draft) = signal(card.title.clone());
    let (description_draft, set_description_draft) = signal(card.description.clone());
    let (priority_draft, set_priority_draft) = signal(card.priority.as_str().to_string());
    let (color_draft, set_color_draft) = signal(card.color.clone());
    let (due_draft, set_due_draft) = signal(
        card.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
    );
    let (labels_draft, set_labels_draft) = signal(card.labels.join(", "));

    let on_mousedown = make_on_mousedown(
        dnd,
        DragItem::Card {
            card_id: card_id.clone(),
        },
    );
    let on_mouseenter = make_on_target_mouseenter(
        dnd,
        DropTarget::Card {
            card_id: card_id.clone(),
        },
    );
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_dragging = {
        let card_id = card_id.clone();
        move || {
            matches!(
                dnd.dragging_read.get(),
                Some(DragItem::Card { card_id: ref did }) if *did == card_id
            )
        }
    };
    let is_drop_target = {
        let card_id = card_id.clone();
        move || {
            matches!(
                dnd.drop_target_read.get(),
                Some(DropTarget::Card { card_id: ref tid }) if *tid == card_id
            )
        }
    };

    let card_class = move || {
        let mut c = String::from("kanban-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    // Expand to edit mode on click, unless the click ends a drag
    let open_editor = move |_| {
        if !dnd.drag_just_ended_read.get_untracked() {
            set_editing.set(true);
        }
    };

    let save = {
        let card_id = card_id.clone();
        move |_| {
            let card_id = card_id.clone();
            let labels: Vec<String> = labels_draft
                .get()
                .split(',')
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
            let due = due_draft.get();
            let patch = CardPatch {
                title: Some(title_draft.get()),
                description: Some(description_draft.get()),
                column_id: None,
                priority: Some(Priority::from_str(&priority_draft.get())),
                color: Some(color_draft.get()),
                due_date: due_date_patch(&due),
                labels: Some(labels),
            };
            set_editing.set(false);
            spawn_local(async move {
                let current = board.get_untracked();
                if let Err(err) = board_controller(set_board)
                    .update_card(&current, &card_id, &patch)
                    .await
                {
                    set_sync_error.set(Some(format!("Card not saved: {}", err)));
                }
            });
        }
    };

    let delete = {
        let card_id = card_id.clone();
        move |_| {
            let card_id = card_id.clone();
            spawn_local(async move {
                let current = board.get_untracked();
                if let Err(err) = board_controller(set_board).delete_card(&current, &card_id).await {
                    set_sync_error.set(Some(format!("Card not deleted: {}", err)));
                }
            });
        }
    };

    let priority_label = card.priority.as_str().to_string();
    let due_label = card.due_date.map(|d| d.format("%b %d").to_string());
    let labels = card.labels.clone();
    let color = card.color.clone();
    let title = card.title.clone();
    let description = card.description.clone();

    view! {
        <div
            class=card_class
            style=format!("border-left: 4px solid {};", color)
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {move || if editing.get() {
                let save = save.clone();
                let delete = delete.clone();
                view! {
                    <div class="card-editor">
                        <input
                            type="text"
                            prop:value=move || title_draft.get()
                            on:input=move |ev| set_title_draft.set(input_value(&ev))
                        />
                        <textarea
                            placeholder="Description"
                            prop:value=move || description_draft.get()
                            on:input=move |ev| set_description_draft.set(input_value(&ev))
                        ></textarea>
                        <select
                            prop:value=move || priority_draft.get()
                            on:change=move |ev| set_priority_draft.set(input_value(&ev))
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                        <input
                            type="color"
                            prop:value=move || color_draft.get()
                            on:input=move |ev| set_color_draft.set(input_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || due_draft.get()
                            on:input=move |ev| set_due_draft.set(input_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Labels, comma separated"
                            prop:value=move || labels_draft.get()
                            on:input=move |ev| set_labels_draft.set(input_value(&ev))
                        />
                        <div class="card-editor-actions">
                            <button on:click=save>"Save"</button>
                            <button on:click=move |_| set_editing.set(false)>"Cancel"</button>
                            <button class="delete-btn" on:click=delete>"Delete"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                let labels = labels.clone();
                let due_label = due_label.clone();
                let priority_label = priority_label.clone();
                let title = title.clone();
                let description = description.clone();
                view! {
                    <div class="card-body" on:click=open_editor>
                        <div class="card-title">{title}</div>
                        {(!description.is_empty()).then(|| view! {
                            <div class="card-description">{description}</div>
                        })}
                        <div class="card-meta">
                            <span class=format!("priority-badge {}", priority_label)>
                                {priority_label.clone()}
                            </span>
                            {due_label.map(|d| view! { <span class="due-date">{d}</span> })}
                            {labels.into_iter().map(|label| view! {
                                <span class="card-label">{label}</span>
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
