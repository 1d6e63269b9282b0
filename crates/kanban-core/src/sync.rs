//! Optimistic Sync Controller
//!
//! Owns all side effects around the pure reconciler: applies mutations to
//! the published board immediately, fires the matching gateway call, and on
//! a failed drag discards the optimistic guess by re-fetching the
//! authoritative board wholesale. Create/update/delete surface their errors
//! without re-fetching; the UI offers manual retry.

use crate::board::Board;
use crate::card::Card;
use crate::drag::{reconcile, DragItem, DropTarget, Reconciled};
use crate::gateway::{CardDraft, CardGateway, CardPatch, GatewayError};

pub struct SyncController<G, F>
where
    G: CardGateway,
    F: Fn(Board),
{
    gateway: G,
    /// Receives every new board snapshot (the UI's write half)
    publish: F,
}

impl<G, F> SyncController<G, F>
where
    G: CardGateway,
    F: Fn(Board),
{
    pub fn new(gateway: G, publish: F) -> Self {
        Self { gateway, publish }
    }

    /// Replace the board with the gateway's authoritative state
    pub async fn refresh(&self) -> Result<Board, GatewayError> {
        let snapshot = self.gateway.list().await?;
        let board = Board::from_snapshot(snapshot);
        (self.publish)(board.clone());
        Ok(board)
    }

    /// Reconcile a drag-end event and persist the card move it implies.
    ///
    /// The optimistic board is published before any network round trip.
    /// Column reorders are client-side only and never hit the gateway.
    pub async fn drag(
        &self,
        board: &Board,
        dragged: &DragItem,
        target: &DropTarget,
    ) -> Result<(), GatewayError> {
        let Reconciled::Applied { board: next, intent } = reconcile(board, dragged, target) else {
            return Ok(());
        };
        (self.publish)(next);

        let Some(intent) = intent else {
            return Ok(());
        };
        match self
            .gateway
            .update(&intent.card_id, &CardPatch::move_to(&intent.column_id))
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                // full-refresh reconciliation: server truth wins over the guess
                let _ = self.refresh().await;
                Err(err)
            }
        }
    }

    /// Create a card. Gateway first, since only the server can assign the
    /// id; the board is touched once the card exists.
    pub async fn create_card(&self, board: &Board, draft: &CardDraft) -> Result<Card, GatewayError> {
        let card = self.gateway.create(draft).await?;
        let mut next = board.clone();
        if !next.insert_card(&draft.column_id, card.clone()) {
            // the client column vanished meanwhile; fall back to server truth
            self.refresh().await?;
            return Ok(card);
        }
        (self.publish)(next);
        Ok(card)
    }

    /// Patch a card optimistically, then persist. A failure leaves the
    /// optimistic state in place and is surfaced to the caller.
    pub async fn update_card(
        &self,
        board: &Board,
        card_id: &str,
        patch: &CardPatch,
    ) -> Result<(), GatewayError> {
        let mut next = board.clone();
        if let Some(column_id) = &patch.column_id {
            next.move_card(card_id, column_id);
        }
        if let Some(card) = next.card_mut(card_id) {
            if let Some(title) = &patch.title {
                card.title = title.clone();
            }
            if let Some(description) = &patch.description {
                card.description = description.clone();
            }
            if let Some(priority) = patch.priority {
                card.priority = priority;
            }
            if let Some(color) = &patch.color {
                card.color = color.clone();
            }
            if let Some(due_date) = patch.due_date {
                card.due_date = due_date;
            }
            if let Some(labels) = &patch.labels {
                card.labels = labels.clone();
            }
        }
        (self.publish)(next);
        self.gateway.update(card_id, patch).await.map(|_| ())
    }

    /// Remove a card optimistically, then persist
    pub async fn delete_card(&self, board: &Board, card_id: &str) -> Result<(), GatewayError> {
        let mut next = board.clone();
        next.remove_card(card_id);
        (self.publish)(next);
        self.gateway.delete(card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Priority;
    use crate::gateway::BoardSnapshot;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory gateway with switchable failures
    #[derive(Default)]
    struct MockGateway {
        /// (column id, card) pairs, in creation order
        cards: RefCell<Vec<(String, Card)>>,
        next_id: Cell<u32>,
        fail_updates: Cell<bool>,
        fail_creates: Cell<bool>,
        fail_deletes: Cell<bool>,
        unauthenticated: Cell<bool>,
        update_calls: Cell<u32>,
    }

    impl MockGateway {
        fn seed(&self, column_id: &str, card_id: &str) {
            self.cards
                .borrow_mut()
                .push((column_id.to_string(), Card::new(card_id, card_id)));
        }

        fn column_of(&self, card_id: &str) -> Option<String> {
            self.cards
                .borrow()
                .iter()
                .find(|(_, c)| c.id == card_id)
                .map(|(col, _)| col.clone())
        }
    }

    #[async_trait(?Send)]
    impl CardGateway for MockGateway {
        async fn list(&self) -> Result<BoardSnapshot, GatewayError> {
            if self.unauthenticated.get() {
                return Err(GatewayError::NotAuthenticated);
            }
            let mut snapshot = BoardSnapshot::new();
            for (column_id, card) in self.cards.borrow().iter() {
                snapshot
                    .entry(column_id.clone())
                    .or_default()
                    .push(card.clone());
            }
            Ok(snapshot)
        }

        async fn create(&self, draft: &CardDraft) -> Result<Card, GatewayError> {
            if self.fail_creates.get() {
                return Err(GatewayError::Gateway("create failed".to_string()));
            }
            let n = self.next_id.get() + 1;
            self.next_id.set(n);
            let card = Card {
                id: format!("c{}", n),
                title: draft.title.clone(),
                description: draft.description.clone(),
                priority: draft.priority,
                color: draft.color.clone(),
                due_date: draft.due_date,
                labels: draft.labels.clone(),
            };
            self.cards
                .borrow_mut()
                .push((draft.column_id.clone(), card.clone()));
            Ok(card)
        }

        async fn update(&self, card_id: &str, patch: &CardPatch) -> Result<Card, GatewayError> {
            self.update_calls.set(self.update_calls.get() + 1);
            if self.fail_updates.get() {
                return Err(GatewayError::Gateway("update failed".to_string()));
            }
            let mut cards = self.cards.borrow_mut();
            let Some((column_id, card)) = cards.iter_mut().find(|(_, c)| c.id == card_id) else {
                return Err(GatewayError::NotFound);
            };
            if let Some(new_column) = &patch.column_id {
                *column_id = new_column.clone();
            }
            if let Some(title) = &patch.title {
                card.title = title.clone();
            }
            if let Some(description) = &patch.description {
                card.description = description.clone();
            }
            Ok(card.clone())
        }

        async fn delete(&self, card_id: &str) -> Result<(), GatewayError> {
            if self.fail_deletes.get() {
                return Err(GatewayError::Gateway("delete failed".to_string()));
            }
            let mut cards = self.cards.borrow_mut();
            let before = cards.len();
            cards.retain(|(_, c)| c.id != card_id);
            if cards.len() == before {
                return Err(GatewayError::NotFound);
            }
            Ok(())
        }
    }

    type Published = Rc<RefCell<Vec<Board>>>;

    fn controller(gateway: Rc<MockGateway>) -> (SyncController<Rc<MockGateway>, impl Fn(Board)>, Published) {
        let published: Published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        let controller = SyncController::new(gateway, move |board| sink.borrow_mut().push(board));
        (controller, published)
    }

    fn last(published: &Published) -> Board {
        published.borrow().last().cloned().expect("nothing published")
    }

    fn card_ids(board: &Board, column_id: &str) -> Vec<String> {
        board
            .column(column_id)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_drag_publishes_optimistic_board_then_persists() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        gateway.seed("in-progress", "z");
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        let dragged = DragItem::Card { card_id: "x".to_string() };
        let target = DropTarget::Column { column_id: "in-progress".to_string() };
        controller.drag(&board, &dragged, &target).await.unwrap();

        // second publish is the optimistic board, before any round trip
        assert_eq!(card_ids(&published.borrow()[1], "in-progress"), vec!["z", "x"]);
        assert_eq!(gateway.column_of("x"), Some("in-progress".to_string()));
    }

    #[tokio::test]
    async fn test_drag_failure_recovers_authoritative_state() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        gateway.fail_updates.set(true);
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        let dragged = DragItem::Card { card_id: "x".to_string() };
        let target = DropTarget::Column { column_id: "done".to_string() };
        let err = controller.drag(&board, &dragged, &target).await.unwrap_err();
        assert!(matches!(err, GatewayError::Gateway(_)));

        // optimistic board was visible first, then replaced by server truth
        assert_eq!(card_ids(&published.borrow()[1], "done"), vec!["x"]);
        let final_board = last(&published);
        assert_eq!(card_ids(&final_board, "todo"), vec!["x"]);
        assert!(final_board.column("done").unwrap().cards.is_empty());
        assert_eq!(final_board, Board::from_snapshot(gateway.list().await.unwrap()));
    }

    #[tokio::test]
    async fn test_same_column_drag_never_hits_gateway() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        gateway.seed("todo", "y");
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();
        let publishes_before = published.borrow().len();

        let dragged = DragItem::Card { card_id: "x".to_string() };
        controller
            .drag(&board, &dragged, &DropTarget::Card { card_id: "y".to_string() })
            .await
            .unwrap();

        assert_eq!(published.borrow().len(), publishes_before);
        assert_eq!(gateway.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_column_reorder_is_client_side_only() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        let dragged = DragItem::Column { column_id: "done".to_string() };
        let target = DropTarget::Column { column_id: "todo".to_string() };
        controller.drag(&board, &dragged, &target).await.unwrap();

        let ids: Vec<String> = last(&published)
            .columns()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["done", "todo", "in-progress"]);
        assert_eq!(gateway.update_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_create_then_drag_scenario() {
        let gateway = Rc::new(MockGateway::default());
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        let draft = CardDraft::new("Write report", "todo");
        let card = controller.create_card(&board, &draft).await.unwrap();
        assert_eq!(card.id, "c1");
        assert_eq!(card.priority, Priority::Medium);
        let board = last(&published);
        assert_eq!(card_ids(&board, "todo"), vec!["c1"]);

        let dragged = DragItem::Card { card_id: "c1".to_string() };
        let target = DropTarget::Column { column_id: "done".to_string() };
        controller.drag(&board, &dragged, &target).await.unwrap();

        let board = last(&published);
        assert!(board.column("todo").unwrap().cards.is_empty());
        assert_eq!(card_ids(&board, "done"), vec!["c1"]);
        assert_eq!(gateway.column_of("c1"), Some("done".to_string()));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_board_untouched() {
        let gateway = Rc::new(MockGateway::default());
        gateway.fail_creates.set(true);
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();
        let publishes_before = published.borrow().len();

        let err = controller
            .create_card(&board, &CardDraft::new("Nope", "todo"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Gateway(_)));
        assert_eq!(published.borrow().len(), publishes_before);
    }

    #[tokio::test]
    async fn test_update_failure_leaves_optimistic_state() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        gateway.fail_updates.set(true);
        let patch = CardPatch {
            title: Some("Renamed".to_string()),
            ..CardPatch::default()
        };
        let err = controller.update_card(&board, "x", &patch).await.unwrap_err();
        assert!(matches!(err, GatewayError::Gateway(_)));

        // no refetch for update failures: the optimistic rename stays
        assert_eq!(last(&published).card("x").unwrap().title, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_stale_card_reports_not_found() {
        let gateway = Rc::new(MockGateway::default());
        gateway.seed("todo", "x");
        let (controller, published) = controller(gateway.clone());
        let board = controller.refresh().await.unwrap();

        // another session already deleted it server-side
        gateway.cards.borrow_mut().clear();
        let err = controller.delete_card(&board, "x").await.unwrap_err();
        assert_eq!(err, GatewayError::NotFound);
        // the optimistic removal already applied and is left as-is
        assert!(!last(&published).contains_card("x"));
    }

    #[tokio::test]
    async fn test_unauthenticated_load_aborts_board_construction() {
        let gateway = Rc::new(MockGateway::default());
        gateway.unauthenticated.set(true);
        let (controller, published) = controller(gateway.clone());

        let err = controller.refresh().await.unwrap_err();
        assert_eq!(err, GatewayError::NotAuthenticated);
        assert!(published.borrow().is_empty());
    }
}
