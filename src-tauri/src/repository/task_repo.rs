//! Task Repository Implementation
//!
//! SQLite-backed implementation of Repository<Task>.

use std::sync::Arc;

use async_trait::async_trait;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, EnergyLevel, Task};

const TASK_COLUMNS: &str =
    "id, title, description, energy_level, category, completed, estimated_minutes, created_at, updated_at";

/// SQLite implementation of the task repository
pub struct TaskRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TaskRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn row_to_task(row: &libsql::Row) -> DomainResult<Task> {
    let internal = |e: libsql::Error| DomainError::Internal(e.to_string());
    Ok(Task {
        id: row.get::<i64>(0).map_err(internal)?,
        title: row.get::<String>(1).map_err(internal)?,
        description: row.get::<String>(2).map_err(internal)?,
        energy_level: EnergyLevel::from_str(&row.get::<String>(3).map_err(internal)?),
        category: row.get::<String>(4).map_err(internal)?,
        completed: row.get::<i64>(5).map_err(internal)? != 0,
        estimated_minutes: row.get::<i64>(6).map_err(internal)? as i32,
        created_at: row.get::<Option<i64>>(7).map_err(internal)?,
        updated_at: row.get::<Option<i64>>(8).map_err(internal)?,
    })
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "INSERT INTO tasks (title, description, energy_level, category, completed, estimated_minutes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            libsql::params![
                entity.title.clone(),
                entity.description.clone(),
                entity.energy_level.as_str(),
                entity.category.clone(),
                if entity.completed { 1 } else { 0 },
                entity.estimated_minutes,
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

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS),
                libsql::params![id],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next().await {
            Ok(Some(row_to_task(&row)?))
        } else {
            Ok(None)
        }
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query(
                &format!("SELECT {} FROM tasks ORDER BY created_at DESC, id DESC", TASK_COLUMNS),
                (),
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut tasks = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;
        let now = chrono::Utc::now().timestamp();

        let changed = conn
            .execute(
                "UPDATE tasks SET title = ?, description = ?, energy_level = ?, category = ?, completed = ?, estimated_minutes = ?, updated_at = ? WHERE id = ?",
                libsql::params![
                    entity.title.clone(),
                    entity.description.clone(),
                    entity.energy_level.as_str(),
                    entity.category.clone(),
                    if entity.completed { 1 } else { 0 },
                    entity.estimated_minutes,
                    now,
                    entity.id
                ],
            )
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", entity.id)));
        }

        let mut updated = entity.clone();
        updated.updated_at = Some(now);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        let changed = conn
            .execute("DELETE FROM tasks WHERE id = ?", libsql::params![id])
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("task {}", id)));
        }
        Ok(())
    }
}
