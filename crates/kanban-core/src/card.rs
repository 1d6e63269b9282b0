//! Card Model
//!
//! A card is the unit of work on the board. The id is opaque and
//! server-assigned; the board never invents card ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Color used when a card is created without an explicit one
pub const DEFAULT_CARD_COLOR: &str = "#3b82f6";

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

    /// Unknown strings fall back to the default (medium)
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// A unit of work with title, description, priority, color, due date, labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Server-assigned opaque identifier
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Display hint, not validated
    pub color: String,
    pub due_date: Option<NaiveDate>,
    /// Order preserved for display
    pub labels: Vec<String>,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            color: DEFAULT_CARD_COLOR.to_string(),
            due_date: None,
            labels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults() {
        let card = Card::new("c1", "Write report");
        assert_eq!(card.id, "c1");
        assert_eq!(card.priority, Priority::Medium);
        assert_eq!(card.color, DEFAULT_CARD_COLOR);
        assert!(card.labels.is_empty());
    }

    #[test]
    fn test_priority_round_trip() {
        assert_eq!(Priority::from_str("high"), Priority::High);
        assert_eq!(Priority::from_str("nonsense"), Priority::Medium);
        assert_eq!(Priority::Low.as_str(), "low");
    }
}
