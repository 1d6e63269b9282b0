//! UI Components
//!
//! Reusable Leptos components.

mod add_card;
mod add_column;
mod energy_selector;
mod focus_timer;
pub mod kanban_board;
mod kanban_card;
mod kanban_column;
mod tab_nav;
mod task_list;

pub use add_card::AddCard;
pub use add_column::AddColumn;
pub use energy_selector::EnergySelector;
pub use focus_timer::FocusTimer;
pub use kanban_board::{provide_board_context, KanbanBoard};
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use tab_nav::{AppView, TabNav};
pub use task_list::TaskList;
