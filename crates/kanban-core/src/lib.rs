//! Kanban Board Core
//!
//! Layered architecture:
//! - card/board: Board state model (single source of truth for the rendered board)
//! - drag: Pure drag-end reconciliation (no IO)
//! - gateway: Persistence gateway contract
//! - sync: Optimistic sync controller (apply locally, persist, refetch on drag failure)

mod board;
mod card;
mod drag;
mod gateway;
mod sync;

pub use board::{Board, Column, DEFAULT_COLUMNS};
pub use card::{Card, Priority, DEFAULT_CARD_COLOR};
pub use drag::{reconcile, DragItem, DropTarget, MoveIntent, Reconciled};
pub use gateway::{BoardSnapshot, CardDraft, CardGateway, CardPatch, GatewayError};
pub use sync::SyncController;
