//! Board State Store
//!
//! In-memory ordered collection of columns, each holding an ordered
//! sequence of cards. All mutations are synchronous whole-value
//! transformations; a card id appears in at most one column at any time.
//! Columns themselves exist client-side only; the server persists cards
//! keyed by column id, never column identity or order.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::gateway::BoardSnapshot;

/// Well-known server buckets, in display order
pub const DEFAULT_COLUMNS: &[(&str, &str)] = &[
    ("todo", "To Do"),
    ("in-progress", "In Progress"),
    ("done", "Done"),
];

/// A named, ordered bucket of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }
}

/// The full ordered set of columns and their cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Empty board with the three well-known columns
    pub fn new() -> Self {
        Self {
            columns: DEFAULT_COLUMNS
                .iter()
                .map(|(id, title)| Column::new(*id, *title))
                .collect(),
        }
    }

    /// Rebuild a board from the gateway's column-keyed snapshot.
    ///
    /// Well-known columns come first with their display titles. Any other
    /// key becomes a trailing column titled by its id (the server stores
    /// no column titles), but only when it holds cards: empty server
    /// buckets outside the well-known three would otherwise clutter the
    /// board on every load. Extras are sorted by id for determinism.
    pub fn from_snapshot(mut snapshot: BoardSnapshot) -> Self {
        let mut columns: Vec<Column> = DEFAULT_COLUMNS
            .iter()
            .map(|(id, title)| Column {
                id: (*id).to_string(),
                title: (*title).to_string(),
                cards: snapshot.remove(*id).unwrap_or_default(),
            })
            .collect();

        let mut extra: Vec<(String, Vec<Card>)> = snapshot
            .into_iter()
            .filter(|(_, cards)| !cards.is_empty())
            .collect();
        extra.sort_by(|a, b| a.0.cmp(&b.0));
        for (id, cards) in extra {
            columns.push(Column {
                title: id.clone(),
                id,
                cards,
            });
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Id of the column currently holding the card
    pub fn column_of(&self, card_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.cards.iter().any(|card| card.id == card_id))
            .map(|c| c.id.as_str())
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.cards.iter_mut())
            .find(|card| card.id == card_id)
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.column_of(card_id).is_some()
    }

    /// Append a card to a column. Refused (false) when the column does not
    /// exist or the card id is already on the board, which would break the
    /// one-column-per-card invariant.
    pub fn insert_card(&mut self, column_id: &str, card: Card) -> bool {
        if self.contains_card(&card.id) {
            return false;
        }
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(column) => {
                column.cards.push(card);
                true
            }
            None => false,
        }
    }

    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        for column in &mut self.columns {
            if let Some(pos) = column.cards.iter().position(|c| c.id == card_id) {
                return Some(column.cards.remove(pos));
            }
        }
        None
    }

    /// Move a card to the end of the destination column.
    /// Returns false when either the card or the destination is unknown.
    pub fn move_card(&mut self, card_id: &str, dest_column_id: &str) -> bool {
        if self.column(dest_column_id).is_none() || !self.contains_card(card_id) {
            return false;
        }
        let card = match self.remove_card(card_id) {
            Some(card) => card,
            None => return false,
        };
        self.insert_card(dest_column_id, card)
    }

    /// Move the source column to the target column's index
    pub fn move_column(&mut self, column_id: &str, target_column_id: &str) -> bool {
        let from = self.columns.iter().position(|c| c.id == column_id);
        let to = self.columns.iter().position(|c| c.id == target_column_id);
        match (from, to) {
            (Some(from), Some(to)) if from != to => {
                let column = self.columns.remove(from);
                self.columns.insert(to, column);
                true
            }
            _ => false,
        }
    }

    pub fn rename_column(&mut self, column_id: &str, title: impl Into<String>) -> bool {
        match self.columns.iter_mut().find(|c| c.id == column_id) {
            Some(column) => {
                column.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Add an empty column. Refused when the id is already taken.
    pub fn add_column(&mut self, column_id: impl Into<String>, title: impl Into<String>) -> bool {
        let id = column_id.into();
        if self.column(&id).is_some() {
            return false;
        }
        self.columns.push(Column::new(id, title));
        true
    }

    /// Remove a column and all its cards
    pub fn remove_column(&mut self, column_id: &str) -> Option<Column> {
        let pos = self.columns.iter().position(|c| c.id == column_id)?;
        Some(self.columns.remove(pos))
    }

    /// Cards not yet done (columns whose id or title says "done" excluded)
    pub fn pending_cards(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| c.id != "done" && !c.title.to_lowercase().contains("done"))
            .map(|c| c.cards.len())
            .sum()
    }

    #[cfg(test)]
    pub(crate) fn assert_card_uniqueness(&self) {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for column in &self.columns {
            for card in &column.cards {
                assert!(
                    seen.insert(card.id.as_str()),
                    "card {} appears in more than one column",
                    card.id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cards: &[(&str, &str)]) -> Board {
        let mut board = Board::new();
        for (column_id, card_id) in cards {
            assert!(board.insert_card(column_id, Card::new(*card_id, *card_id)));
        }
        board
    }

    #[test]
    fn test_new_board_has_default_columns() {
        let board = Board::new();
        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "done"]);
    }

    #[test]
    fn test_insert_rejects_duplicate_card_id() {
        let mut board = board_with(&[("todo", "c1")]);
        assert!(!board.insert_card("done", Card::new("c1", "again")));
        board.assert_card_uniqueness();
        assert_eq!(board.column_of("c1"), Some("todo"));
    }

    #[test]
    fn test_insert_into_unknown_column() {
        let mut board = Board::new();
        assert!(!board.insert_card("nope", Card::new("c1", "x")));
        assert!(!board.contains_card("c1"));
    }

    #[test]
    fn test_move_card_appends_to_destination() {
        let mut board = board_with(&[("todo", "x"), ("todo", "y"), ("in-progress", "z")]);
        assert!(board.move_card("x", "in-progress"));
        board.assert_card_uniqueness();

        let todo: Vec<&str> = board.column("todo").unwrap().cards.iter().map(|c| c.id.as_str()).collect();
        let wip: Vec<&str> = board
            .column("in-progress")
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(todo, vec!["y"]);
        assert_eq!(wip, vec!["z", "x"]);
    }

    #[test]
    fn test_move_card_unknown_ids() {
        let mut board = board_with(&[("todo", "x")]);
        let before = board.clone();
        assert!(!board.move_card("ghost", "done"));
        assert!(!board.move_card("x", "ghost-column"));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_column_to_index() {
        let mut board = Board::new();
        assert!(board.move_column("done", "todo"));
        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["done", "todo", "in-progress"]);
    }

    #[test]
    fn test_remove_column_drops_cards() {
        let mut board = board_with(&[("todo", "x"), ("todo", "y")]);
        let removed = board.remove_column("todo").unwrap();
        assert_eq!(removed.cards.len(), 2);
        assert!(!board.contains_card("x"));
    }

    #[test]
    fn test_add_column_unique_id() {
        let mut board = Board::new();
        assert!(board.add_column("backlog", "Backlog"));
        assert!(!board.add_column("backlog", "Again"));
    }

    #[test]
    fn test_from_snapshot_orders_well_known_columns_first() {
        let mut snapshot = BoardSnapshot::new();
        snapshot.insert("done".to_string(), vec![Card::new("c2", "b")]);
        snapshot.insert("review".to_string(), vec![Card::new("c3", "c")]);
        snapshot.insert("todo".to_string(), vec![Card::new("c1", "a")]);
        // empty non-default buckets stay hidden
        snapshot.insert("backlog".to_string(), Vec::new());

        let board = Board::from_snapshot(snapshot);
        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "done", "review"]);
        assert_eq!(board.column_of("c3"), Some("review"));
        board.assert_card_uniqueness();
    }

    #[test]
    fn test_pending_cards_excludes_done() {
        let board = board_with(&[("todo", "a"), ("in-progress", "b"), ("done", "c")]);
        assert_eq!(board.pending_cards(), 2);
    }
}
