//! Board Sync Wiring
//!
//! Binds the generic sync controller to this app's gateway and to a
//! Leptos signal as its publish sink. Signals are arena handles, so the
//! controller is cheap to build at every call site; building it fresh
//! avoids holding an `Rc` across await points in event handlers.

use leptos::prelude::*;

use kanban_core::{Board, SyncController};

use crate::gateway::IpcGateway;

pub fn board_controller(
    set_board: WriteSignal<Board>,
) -> SyncController<IpcGateway, impl Fn(Board)> {
    SyncController::new(IpcGateway, move |board| set_board.set(board))
}
