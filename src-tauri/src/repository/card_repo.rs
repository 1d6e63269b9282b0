//! Card Repository Implementation
//!
//! SQLite-backed implementation of Repository<KanbanCard> plus the
//! board-shaped queries the kanban commands need.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, KanbanCard, Priority, WELL_KNOWN_COLUMNS};

const CARD_COLUMNS: &str =
    "id, title, description, column_id, priority, color, due_date, labels, created_at, updated_at";

/// SQLite implementation of the card repository
pub struct CardRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CardRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Full board state keyed by column id. Well-known buckets are always
    /// present (possibly empty); custom columns appear only when a card
    /// lives there.
    pub async fn list_grouped(&self) -> DomainResult<HashMap<String, Vec<KanbanCard>>> {
        let cards = self.list().await?;

        let mut grouped: HashMap<String, Vec<KanbanCard>> = WELL_KNOWN_COLUMNS
            .iter()
            .map(|column| ((*column).to_string(), Vec::new()))
            .collect();
        for card in cards {
            grouped.entry(card.column.clone()).or_default().push(card);
        }
        Ok(grouped)
    }

    /// Persist a drag move: the one card field whose server copy must stay
    /// consistent with the client's.
    pub async fn set_column(&self, id: i64, column: &str) -> DomainResult<KanbanCard> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "UPDATE kanban_cards SET column_id = ?, updated_at = ? WHERE id = ?",
                libsql::params![column, chrono::Utc::now().timestamp(), id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("card {}", id)));
        }
        drop(conn);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("card {}", id)))
    }
}

fn encode_labels(labels: &[String]) -> DomainResult<String> {
    serde_json::to_string(labels).map_err(|e| DomainError::Internal(e.to_string()))
}

fn row_to_card(row: &libsql::Row) -> DomainResult<KanbanCard> {
    let internal = |e: libsql::Error| DomainError::Internal(e.to_string());
    let labels_json = row.get::<String>(7).map_err(internal)?;
    Ok(KanbanCard {
        id: row.get::<i64>(0).map_err(internal)?,
        title: row.get::<String>(1).map_err(internal)?,
        description: row.get::<String>(2).map_err(internal)?,
        column: row.get::<String>(3).map_err(internal)?,
        priority: Priority::from_str(&row.get::<String>(4).map_err(internal)?),
        color: row.get::<String>(5).map_err(internal)?,
        due_date: row.get::<Option<String>>(6).map_err(internal)?,
        labels: serde_json::from_str(&labels_json).unwrap_or_default(),
        created_at: row.get::<Option<i64>>(8).map_err(internal)?,
        updated_at: row.get::<Option<i64>>(9).map_err(internal)?,
    })
}

#[async_trait]
impl Repository<KanbanCard> for CardRepository {
    async fn create(&self, entity: &KanbanCard) -> DomainResult<KanbanCard> {
        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "INSERT INTO kanban_cards (title, description, column_id, priority, color, due_date, labels, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                entity.title.clone(),
                entity.description.clone(),
                entity.column.clone(),
                entity.priority.as_str(),
                entity.color.clone(),
                entity.due_date.clone(),
                encode_labels(&entity.labels)?,
                now,
                now
            ],
        )
        .await
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid();
        created.created_at = Some(now);
        created.updated_at = Some(now);
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<KanbanCard>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!("SELECT {} FROM kanban_cards WHERE id = ?", CARD_COLUMNS),
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_card(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<KanbanCard>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!(
                    "SELECT {} FROM kanban_cards ORDER BY created_at DESC, id DESC",
                    CARD_COLUMNS
                ),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut cards = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }

    async fn update(&self, entity: &KanbanCard) -> DomainResult<KanbanCard> {
        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let changed = conn
            .execute(
                "UPDATE kanban_cards SET title = ?, description = ?, column_id = ?, priority = ?, color = ?, due_date = ?, labels = ?, updated_at = ? WHERE id = ?",
                libsql::params![
                    entity.title.clone(),
                    entity.description.clone(),
                    entity.column.clone(),
                    entity.priority.as_str(),
                    entity.color.clone(),
                    entity.due_date.clone(),
                    encode_labels(&entity.labels)?,
                    now,
                    entity.id
                ],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("card {}", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute(
                "DELETE FROM kanban_cards WHERE id = ?",
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("card {}", id)));
        }
        Ok(())
    }
}
