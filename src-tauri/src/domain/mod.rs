//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod card;
mod entity;
mod task;

pub use card::{KanbanCard, Priority, WELL_KNOWN_COLUMNS};
pub use entity::{DomainError, DomainResult, Entity};
pub use task::{EnergyLevel, Task};
