//! Persistence Gateway Contract
//!
//! The core's only external dependency: four CRUD operations for cards.
//! Implementations attach whatever session credential the transport needs;
//! the core only sees the error taxonomy.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::card::{Card, Priority, DEFAULT_CARD_COLOR};

/// Full board state as the gateway reports it, keyed by column id
pub type BoardSnapshot = HashMap<String, Vec<Card>>;

/// Errors as consumed by the core. No retry or backoff lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No valid session; at initial load this aborts board construction
    /// so the UI can redirect instead of showing a load error
    NotAuthenticated,
    /// Stale id, e.g. a card deleted by another session
    NotFound,
    /// Network or server failure, undifferentiated
    Gateway(String),
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::NotAuthenticated => write!(f, "not authenticated"),
            GatewayError::NotFound => write!(f, "not found"),
            GatewayError::Gateway(msg) => write!(f, "gateway error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Fields for creating a card; the server assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub column_id: String,
    pub priority: Priority,
    pub color: String,
    pub due_date: Option<NaiveDate>,
    pub labels: Vec<String>,
}

impl CardDraft {
    pub fn new(title: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            priority: Priority::default(),
            color: DEFAULT_CARD_COLOR.to_string(),
            due_date: None,
            labels: Vec::new(),
        }
    }
}

/// Partial update; None fields are left untouched server-side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column_id: Option<String>,
    pub priority: Option<Priority>,
    pub color: Option<String>,
    /// Outer None = untouched, inner None = clear the due date
    pub due_date: Option<Option<NaiveDate>>,
    pub labels: Option<Vec<String>>,
}

impl CardPatch {
    /// The patch a drag move persists
    pub fn move_to(column_id: impl Into<String>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            ..Self::default()
        }
    }

    /// Some(column) iff this patch moves the card and changes nothing
    /// else, letting transports route it to a dedicated move endpoint.
    pub fn as_move(&self) -> Option<&str> {
        match self {
            CardPatch {
                column_id: Some(column),
                title: None,
                description: None,
                priority: None,
                color: None,
                due_date: None,
                labels: None,
            } => Some(column),
            _ => None,
        }
    }
}

/// CRUD contract against the card store.
///
/// `?Send` because the WASM frontend drives this from a single-threaded
/// event loop; host-side tests run it on a current-thread runtime.
#[async_trait(?Send)]
pub trait CardGateway {
    /// Fetch the full board state, keyed by column
    async fn list(&self) -> Result<BoardSnapshot, GatewayError>;

    /// Create a card; the returned card carries the server-assigned id
    async fn create(&self, draft: &CardDraft) -> Result<Card, GatewayError>;

    /// Partial update; NotFound for ids the store no longer knows
    async fn update(&self, card_id: &str, patch: &CardPatch) -> Result<Card, GatewayError>;

    async fn delete(&self, card_id: &str) -> Result<(), GatewayError>;
}

// Shared gateways (the frontend hands one controller and several event
// handlers the same gateway) work through Rc.
#[async_trait(?Send)]
impl<G: CardGateway> CardGateway for std::rc::Rc<G> {
    async fn list(&self) -> Result<BoardSnapshot, GatewayError> {
        (**self).list().await
    }

    async fn create(&self, draft: &CardDraft) -> Result<Card, GatewayError> {
        (**self).create(draft).await
    }

    async fn update(&self, card_id: &str, patch: &CardPatch) -> Result<Card, GatewayError> {
        (**self).update(card_id, patch).await
    }

    async fn delete(&self, card_id: &str) -> Result<(), GatewayError> {
        (**self).delete(card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_patch_is_recognized() {
        assert_eq!(CardPatch::move_to("done").as_move(), Some("done"));
    }

    #[test]
    fn test_mixed_patch_is_not_a_move() {
        let patch = CardPatch {
            title: Some("Renamed".to_string()),
            ..CardPatch::move_to("done")
        };
        assert_eq!(patch.as_move(), None);
        assert_eq!(CardPatch::default().as_move(), None);
    }
}
