//! Kanban Card Entity
//!
//! A card on the board. The column is a free-form string: the well-known
//! buckets always exist in listings, anything else is a custom column the
//! client invented. Column identity and order are not stored here.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Buckets every grouped listing reports, even when empty
pub const WELL_KNOWN_COLUMNS: &[&str] =
    &["todo", "in-progress", "done", "backlog", "review", "archived"];

/// Card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// A kanban card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanbanCard {
    /// Unique identifier (database-assigned)
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Column bucket this card lives in
    pub column: String,
    pub priority: Priority,
    /// Display hint, free-form
    pub color: String,
    /// ISO date (YYYY-MM-DD)
    pub due_date: Option<String>,
    pub labels: Vec<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl KanbanCard {
    /// New card in a column with default presentation fields
    pub fn new(id: i64, title: String, column: String) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            column,
            priority: Priority::default(),
            color: "#3b82f6".to_string(),
            due_date: None,
            labels: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for KanbanCard {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = KanbanCard::new(1, "Write report".to_string(), "todo".to_string());
        assert_eq!(card.id(), 1);
        assert_eq!(card.priority, Priority::Medium);
        assert_eq!(card.column, "todo");
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(Priority::from_str("high"), Priority::High);
        assert_eq!(Priority::from_str("whatever"), Priority::Medium);
        assert_eq!(Priority::Low.as_str(), "low");
    }
}
