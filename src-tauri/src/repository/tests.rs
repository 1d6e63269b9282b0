//! Repository Integration Tests
//!
//! Tests for CardRepository and TaskRepository with in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::domain::{EnergyLevel, KanbanCard, Priority, Task, WELL_KNOWN_COLUMNS};
    use crate::repository::{init_db, CardRepository, Repository, TaskRepository};
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn setup_card_repo() -> CardRepository {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        CardRepository::new(Arc::new(Mutex::new(db_state.connection())))
    }

    async fn setup_task_repo() -> TaskRepository {
        let db_path = PathBuf::from(":memory:");
        let db_state = init_db(&db_path).await.expect("Failed to init test DB");
        TaskRepository::new(Arc::new(Mutex::new(db_state.connection())))
    }

    fn card(title: &str, column: &str) -> KanbanCard {
        KanbanCard::new(0, title.to_string(), column.to_string())
    }

    #[tokio::test]
    async fn test_create_card() {
        let repo = setup_card_repo().await;

        let created = repo.create(&card("Write report", "todo")).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.title, "Write report");
        assert_eq!(created.column, "todo");
        assert_eq!(created.priority, Priority::Medium);
        assert!(created.created_at.is_some());
    }

    #[tokio::test]
    async fn test_find_card_by_id() {
        let repo = setup_card_repo().await;

        let created = repo.create(&card("Find me", "todo")).await.unwrap();

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Find me");

        let missing = repo.find_by_id(9999).await.expect("Find failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_card() {
        let repo = setup_card_repo().await;

        let mut created = repo.create(&card("Original", "todo")).await.unwrap();
        created.title = "Updated".to_string();
        created.priority = Priority::High;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.title, "Updated");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_update_missing_card_is_not_found() {
        let repo = setup_card_repo().await;
        let mut ghost = card("Ghost", "todo");
        ghost.id = 424242;
        assert!(repo.update(&ghost).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_card() {
        let repo = setup_card_repo().await;

        let created = repo.create(&card("To delete", "todo")).await.unwrap();
        repo.delete(created.id).await.expect("Delete failed");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_none());

        // second delete reports the stale id
        assert!(repo.delete(created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_set_column_persists_a_drag_move() {
        let repo = setup_card_repo().await;

        let created = repo.create(&card("Moving", "todo")).await.unwrap();
        let moved = repo.set_column(created.id, "done").await.expect("Move failed");
        assert_eq!(moved.column, "done");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.column, "done");

        assert!(repo.set_column(9999, "done").await.is_err());
    }

    #[tokio::test]
    async fn test_list_grouped_reports_well_known_buckets() {
        let repo = setup_card_repo().await;

        repo.create(&card("A", "todo")).await.unwrap();
        repo.create(&card("B", "in-progress")).await.unwrap();
        repo.create(&card("C", "my-custom-column")).await.unwrap();

        let grouped = repo.list_grouped().await.expect("Grouping failed");

        for bucket in WELL_KNOWN_COLUMNS {
            assert!(grouped.contains_key(*bucket), "missing bucket {}", bucket);
        }
        assert_eq!(grouped["todo"].len(), 1);
        assert!(grouped["done"].is_empty());
        assert_eq!(grouped["my-custom-column"].len(), 1);
    }

    #[tokio::test]
    async fn test_labels_survive_storage() {
        let repo = setup_card_repo().await;

        let mut draft = card("Labelled", "todo");
        draft.labels = vec!["deep-work".to_string(), "urgent".to_string()];
        draft.due_date = Some("2026-09-15".to_string());
        let created = repo.create(&draft).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.labels, vec!["deep-work", "urgent"]);
        assert_eq!(found.due_date.as_deref(), Some("2026-09-15"));
    }

    #[tokio::test]
    async fn test_task_crud() {
        let repo = setup_task_repo().await;

        let created = repo
            .create(&Task::new(0, "Deep work".to_string(), EnergyLevel::High))
            .await
            .expect("Failed to create");
        assert!(created.id > 0);

        let mut toggled = created.clone();
        toggled.completed = true;
        repo.update(&toggled).await.expect("Update failed");

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert!(found.completed);
        assert_eq!(found.energy_level, EnergyLevel::High);

        repo.delete(created.id).await.expect("Delete failed");
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let repo = setup_task_repo().await;

        repo.create(&Task::new(0, "One".to_string(), EnergyLevel::Low)).await.unwrap();
        repo.create(&Task::new(0, "Two".to_string(), EnergyLevel::Medium)).await.unwrap();

        let tasks = repo.list().await.expect("List failed");
        assert_eq!(tasks.len(), 2);
    }
}
