//! Frontend Data Models
//!
//! Mirrors of the backend entities as they cross the IPC boundary.
//! Enum-like fields (priority, energy level) travel as plain strings;
//! the board core re-types them on conversion.

use serde::{Deserialize, Serialize};

/// A kanban card as the backend stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Column id the card lives in ("todo", "in-progress", ...)
    pub column: String,
    /// "low" | "medium" | "high"
    pub priority: String,
    /// Hex accent color
    pub color: String,
    /// ISO date "YYYY-MM-DD"
    pub due_date: Option<String>,
    pub labels: Vec<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// A focus-sprint task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// "high" | "medium" | "low"
    pub energy_level: String,
    pub category: String,
    pub completed: bool,
    pub estimated_minutes: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Energy level options for the selector and task form
pub const ENERGY_LEVELS: &[(&str, &str)] = &[
    ("high", "High Energy"),
    ("medium", "Medium Energy"),
    ("low", "Low Energy"),
];
