//! IPC Card Gateway
//!
//! Implements the board core's persistence contract over Tauri IPC.
//! Backend errors arrive as flat strings; the "Not found: " display
//! prefix is the only structured part, mapped back to the typed variant
//! so the sync controller can tell stale ids from transport failures.

use async_trait::async_trait;
use chrono::NaiveDate;

use kanban_core::{BoardSnapshot, Card, CardDraft, CardGateway, CardPatch, GatewayError, Priority};

use crate::commands::{self, CreateCardArgs, UpdateCardArgs};
use crate::models::KanbanCard;

const DATE_FMT: &str = "%Y-%m-%d";

pub struct IpcGateway;

fn map_error(msg: String) -> GatewayError {
    if msg.starts_with("Not found") {
        GatewayError::NotFound
    } else {
        GatewayError::Gateway(msg)
    }
}

/// Card ids are backend row ids; a non-numeric id can only be stale
fn parse_id(card_id: &str) -> Result<i64, GatewayError> {
    card_id.parse().map_err(|_| GatewayError::NotFound)
}

fn to_core(card: KanbanCard) -> Card {
    Card {
        id: card.id.to_string(),
        title: card.title,
        description: card.description,
        priority: Priority::from_str(&card.priority),
        color: card.color,
        due_date: card
            .due_date
            .and_then(|d| NaiveDate::parse_from_str(&d, DATE_FMT).ok()),
        labels: card.labels,
    }
}

#[async_trait(?Send)]
impl CardGateway for IpcGateway {
    async fn list(&self) -> Result<BoardSnapshot, GatewayError> {
        let grouped = commands::list_cards().await.map_err(map_error)?;
        Ok(grouped
            .into_iter()
            .map(|(column, cards)| (column, cards.into_iter().map(to_core).collect()))
            .collect())
    }

    async fn create(&self, draft: &CardDraft) -> Result<Card, GatewayError> {
        let due_date = draft.due_date.map(|d| d.format(DATE_FMT).to_string());
        let args = CreateCardArgs {
            title: &draft.title,
            description: Some(&draft.description),
            column: &draft.column_id,
            priority: Some(draft.priority.as_str()),
            color: Some(&draft.color),
            due_date: due_date.as_deref(),
            labels: Some(&draft.labels),
        };
        commands::create_card(&args).await.map(to_core).map_err(map_error)
    }

    async fn update(&self, card_id: &str, patch: &CardPatch) -> Result<Card, GatewayError> {
        let id = parse_id(card_id)?;

        // drag moves go through the dedicated move endpoint
        if let Some(column) = patch.as_move() {
            return commands::move_card(id, column).await.map(to_core).map_err(map_error);
        }

        let args = UpdateCardArgs {
            id,
            title: patch.title.clone(),
            description: patch.description.clone(),
            column: patch.column_id.clone(),
            priority: patch.priority.map(|p| p.as_str().to_string()),
            color: patch.color.clone(),
            // inner None clears the date, which the backend spells ""
            due_date: patch.due_date.map(|d| {
                d.map(|d| d.format(DATE_FMT).to_string()).unwrap_or_default()
            }),
            labels: patch.labels.clone(),
        };
        commands::update_card(&args).await.map(to_core).map_err(map_error)
    }

    async fn delete(&self, card_id: &str) -> Result<(), GatewayError> {
        let id = parse_id(card_id)?;
        commands::delete_card(id).await.map_err(map_error)
    }
}
