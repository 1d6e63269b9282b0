//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use libsql::{Builder, Connection, Database};
use std::path::Path;

/// Database state wrapper. Connections are cheap clones of the inner one.
pub struct DbState {
    conn: Connection,
    _db: Database,
}

impl DbState {
    pub fn connection(&self) -> Connection {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and run migrations
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let db_path_str = db_path.to_str().ok_or("Invalid DB path")?;

    let db = Builder::new_local(db_path_str)
        .build()
        .await
        .map_err(|e| format!("Failed to build db: {}", e))?;

    let conn = db.connect().map_err(|e| format!("Failed to connect: {}", e))?;

    run_migrations(&conn).await?;

    Ok(DbState { conn, _db: db })
}

/// Check if a column exists in a table
async fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    if let Ok(mut rows) = conn.query(&query, ()).await {
        while let Ok(Some(row)) = rows.next().await {
            if let Ok(name) = row.get::<String>(1) {
                if name == column {
                    return true;
                }
            }
        }
    }
    false
}

/// Run database migrations
async fn run_migrations(conn: &Connection) -> Result<(), String> {
    // Kanban cards - create if not exists
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kanban_cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            column_id TEXT NOT NULL DEFAULT 'todo',
            priority TEXT NOT NULL DEFAULT 'medium',
            color TEXT NOT NULL DEFAULT '#3b82f6',
            labels TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER,
            updated_at INTEGER
        )",
        (),
    )
    .await
    .map_err(|e| e.to_string())?;

    // due_date arrived after the first release
    if !column_exists(conn, "kanban_cards", "due_date").await {
        conn.execute("ALTER TABLE kanban_cards ADD COLUMN due_date TEXT", ())
            .await
            .map_err(|e| format!("Failed to add due_date: {}", e))?;
    }

    // Index for the grouped board listing
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_cards_column ON kanban_cards(column_id)",
        (),
    )
    .await
    .map_err(|e| e.to_string())?;

    // Tasks
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            energy_level TEXT NOT NULL DEFAULT 'medium',
            category TEXT NOT NULL DEFAULT 'other',
            completed INTEGER NOT NULL DEFAULT 0,
            estimated_minutes INTEGER NOT NULL DEFAULT 25,
            created_at INTEGER,
            updated_at INTEGER
        )",
        (),
    )
    .await
    .map_err(|e| e.to_string())?;

    Ok(())
}
