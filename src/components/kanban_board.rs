//! Kanban Board Component
//!
//! The board signal and drag-and-drop wiring live in `BoardContext`,
//! provided once at app scope so the global listeners never outlive the
//! signals they capture. The view loads the board on each mount; drag
//! moves publish optimistically and a failed persist swaps the guess for
//! the server's board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::{bind_global_mouseup, create_dnd_signals, DndSignals};
use kanban_core::{Board, DragItem, DropTarget, GatewayError};

use crate::components::{AddColumn, KanbanColumn};
use crate::sync::board_controller;

/// DnD signal bundle shared by columns and cards
pub type BoardDnd = DndSignals<DragItem, DropTarget>;

/// Board state shared between the board view and the global drop handler
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub board: ReadSignal<Board>,
    pub set_board: WriteSignal<Board>,
    pub sync_error: ReadSignal<Option<String>>,
    pub set_sync_error: WriteSignal<Option<String>>,
    pub dnd: BoardDnd,
}

/// Create the board signals and bind the global drag-and-drop listeners.
///
/// Must run in a scope that outlives the board view: the document-level
/// mousemove/mouseup listeners registered here stay bound for the app's
/// lifetime, so every signal they capture has to live as long. Called
/// once from `App`; mounting the board view only reads the context.
pub fn provide_board_context() {
    let (board, set_board) = signal(Board::new());
    let (sync_error, set_sync_error) = signal(None::<String>);
    let dnd: BoardDnd = create_dnd_signals();

    // Drop handler: reconcile + persist
    bind_global_mouseup(dnd, move |dragged: DragItem, target: DropTarget| {
        spawn_local(async move {
            let current = board.get_untracked();
            if let Err(err) = board_controller(set_board).drag(&current, &dragged, &target).await {
                web_sys::console::log_1(&format!("[BOARD] Move failed: {}", err).into());
                set_sync_error.set(Some(format!("Move not saved: {}", err)));
            }
        });
    });

    provide_context(BoardContext {
        board,
        set_board,
        sync_error,
        set_sync_error,
        dnd,
    });
}

#[derive(Clone, PartialEq)]
enum BoardLoad {
    Loading,
    Ready,
    Failed(String),
}

/// Kanban board view with drag-and-drop
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let BoardContext {
        board,
        set_board,
        sync_error,
        set_sync_error,
        dnd,
    } = use_context::<BoardContext>().expect("BoardContext should be provided");

    let (load_state, set_load_state) = signal(BoardLoad::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load the authoritative board
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[BOARD] Loading board, trigger={}", trigger).into());
        set_load_state.set(BoardLoad::Loading);
        spawn_local(async move {
            match board_controller(set_board).refresh().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[BOARD] Loaded {} columns", loaded.columns().len()).into(),
                    );
                    set_load_state.set(BoardLoad::Ready);
                }
                Err(GatewayError::NotAuthenticated) => {
                    set_load_state.set(BoardLoad::Failed("Please sign in first".to_string()));
                }
                Err(err) => {
                    set_load_state.set(BoardLoad::Failed(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="kanban-board">
            // Sync error banner with dismiss
            {move || sync_error.get().map(|msg| view! {
                <div class="sync-error-banner">
                    <span>{msg}</span>
                    <button on:click=move |_| set_sync_error.set(None)>"×"</button>
                </div>
            })}

            {move || match load_state.get() {
                BoardLoad::Loading => view! {
                    <p class="board-status">"Loading board..."</p>
                }.into_any(),
                BoardLoad::Failed(msg) => view! {
                    <div class="board-status error">
                        <p>{format!("Could not load board: {}", msg)}</p>
                        <button on:click=move |_| set_reload_trigger.update(|v| *v += 1)>
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                BoardLoad::Ready => view! {
                    <div class="board-columns">
                        {move || board.get().columns().iter().map(|column| view! {
                            <KanbanColumn
                                column=column.clone()
                                board=board
                                set_board=set_board
                                dnd=dnd
                                set_sync_error=set_sync_error
                            />
                        }).collect_view()}
                        <AddColumn set_board=set_board />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
