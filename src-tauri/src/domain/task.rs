//! Task Entity
//!
//! A task on the focus-sprint side of the app: picked by energy level,
//! worked on in 25 minute sprints.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// How much energy a task needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl EnergyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "high" => EnergyLevel::High,
            "low" => EnergyLevel::Low,
            _ => EnergyLevel::Medium,
        }
    }
}

/// A task with energy-based matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub energy_level: EnergyLevel,
    pub category: String,
    pub completed: bool,
    pub estimated_minutes: i32,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Task {
    pub fn new(id: i64, title: String, energy_level: EnergyLevel) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            energy_level,
            category: "other".to_string(),
            completed: false,
            estimated_minutes: 25,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Task {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Deep work".to_string(), EnergyLevel::High);
        assert_eq!(task.id(), 1);
        assert!(!task.completed);
        assert_eq!(task.estimated_minutes, 25);
    }

    #[test]
    fn test_energy_level_parsing() {
        assert_eq!(EnergyLevel::from_str("low"), EnergyLevel::Low);
        assert_eq!(EnergyLevel::from_str(""), EnergyLevel::Medium);
    }
}
