//! Drag Reconciler
//!
//! Interprets a drag-end event and computes the next board plus the single
//! persistence intent needed to reflect it. Pure: no IO, never panics on
//! stale identifiers. The drag layer hands us tagged variants, so there is
//! no string-prefix parsing to get wrong here.

use crate::board::Board;

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Card { card_id: String },
    Column { column_id: String },
}

/// What it was dropped on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Card { card_id: String },
    Column { column_id: String },
}

/// The one persistence call a card move requires.
/// Column reorders produce no intent: column order is client-side only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub card_id: String,
    pub column_id: String,
}

/// Outcome of reconciling a drag-end event
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciled {
    /// Same-column drops, self drops and stale ids are absorbed here
    Unchanged,
    Applied {
        board: Board,
        intent: Option<MoveIntent>,
    },
}

/// Reconcile a drag-end event against the current board.
///
/// Cards move between columns (appended at the destination's end; in-column
/// reordering is not supported). Columns reorder with move-to-index
/// semantics. Anything unresolvable is a no-op.
pub fn reconcile(board: &Board, dragged: &DragItem, target: &DropTarget) -> Reconciled {
    match dragged {
        DragItem::Column { column_id } => {
            let DropTarget::Column { column_id: target_id } = target else {
                // a column dropped on a card is not a meaningful reorder
                return Reconciled::Unchanged;
            };
            if column_id == target_id {
                return Reconciled::Unchanged;
            }
            let mut next = board.clone();
            if next.move_column(column_id, target_id) {
                Reconciled::Applied {
                    board: next,
                    intent: None,
                }
            } else {
                Reconciled::Unchanged
            }
        }
        DragItem::Card { card_id } => {
            let dest_column = match target {
                DropTarget::Column { column_id } => match board.column(column_id) {
                    Some(column) => column.id.clone(),
                    None => return Reconciled::Unchanged,
                },
                // dropped on another card: land in that card's column
                DropTarget::Card { card_id: over_id } => match board.column_of(over_id) {
                    Some(column_id) => column_id.to_string(),
                    None => return Reconciled::Unchanged,
                },
            };

            let Some(source_column) = board.column_of(card_id) else {
                return Reconciled::Unchanged;
            };
            if source_column == dest_column {
                return Reconciled::Unchanged;
            }

            let mut next = board.clone();
            if !next.move_card(card_id, &dest_column) {
                return Reconciled::Unchanged;
            }
            Reconciled::Applied {
                board: next,
                intent: Some(MoveIntent {
                    card_id: card_id.clone(),
                    column_id: dest_column,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn card(id: &str) -> DragItem {
        DragItem::Card {
            card_id: id.to_string(),
        }
    }

    fn onto_card(id: &str) -> DropTarget {
        DropTarget::Card {
            card_id: id.to_string(),
        }
    }

    fn onto_column(id: &str) -> DropTarget {
        DropTarget::Column {
            column_id: id.to_string(),
        }
    }

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.insert_card("todo", Card::new("x", "x"));
        board.insert_card("todo", Card::new("y", "y"));
        board.insert_card("in-progress", Card::new("z", "z"));
        board
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

    #[test]
    fn test_card_dropped_on_column_moves_and_appends() {
        let board = sample_board();
        let Reconciled::Applied { board: next, intent } =
            reconcile(&board, &card("x"), &onto_column("in-progress"))
        else {
            panic!("expected a move");
        };
        assert_eq!(card_ids(&next, "todo"), vec!["y"]);
        assert_eq!(card_ids(&next, "in-progress"), vec!["z", "x"]);
        assert_eq!(
            intent,
            Some(MoveIntent {
                card_id: "x".to_string(),
                column_id: "in-progress".to_string(),
            })
        );
        next.assert_card_uniqueness();
    }

    #[test]
    fn test_card_dropped_on_card_lands_in_its_column() {
        let board = sample_board();
        let Reconciled::Applied { board: next, intent } =
            reconcile(&board, &card("x"), &onto_card("z"))
        else {
            panic!("expected a move");
        };
        assert_eq!(card_ids(&next, "in-progress"), vec!["z", "x"]);
        assert_eq!(intent.unwrap().column_id, "in-progress");
    }

    #[test]
    fn test_same_column_drop_is_absorbed() {
        let board = sample_board();
        assert_eq!(
            reconcile(&board, &card("x"), &onto_column("todo")),
            Reconciled::Unchanged
        );
        assert_eq!(
            reconcile(&board, &card("x"), &onto_card("y")),
            Reconciled::Unchanged
        );
    }

    #[test]
    fn test_card_dropped_on_itself() {
        let board = sample_board();
        assert_eq!(
            reconcile(&board, &card("x"), &onto_card("x")),
            Reconciled::Unchanged
        );
    }

    #[test]
    fn test_stale_identifiers_are_no_ops() {
        let board = sample_board();
        assert_eq!(
            reconcile(&board, &card("ghost"), &onto_column("done")),
            Reconciled::Unchanged
        );
        assert_eq!(
            reconcile(&board, &card("x"), &onto_column("ghost-column")),
            Reconciled::Unchanged
        );
        assert_eq!(
            reconcile(&board, &card("x"), &onto_card("ghost")),
            Reconciled::Unchanged
        );
    }

    #[test]
    fn test_column_reorder_moves_to_target_index() {
        let board = sample_board();
        let dragged = DragItem::Column {
            column_id: "done".to_string(),
        };
        let Reconciled::Applied { board: next, intent } =
            reconcile(&board, &dragged, &onto_column("todo"))
        else {
            panic!("expected a reorder");
        };
        let ids: Vec<&str> = next.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["done", "todo", "in-progress"]);
        // column order is never persisted
        assert_eq!(intent, None);
        // card contents unchanged
        assert_eq!(card_ids(&next, "todo"), vec!["x", "y"]);
        assert_eq!(card_ids(&next, "in-progress"), vec!["z"]);
    }

    #[test]
    fn test_column_dropped_on_itself_or_card() {
        let board = sample_board();
        let dragged = DragItem::Column {
            column_id: "todo".to_string(),
        };
        assert_eq!(
            reconcile(&board, &dragged, &onto_column("todo")),
            Reconciled::Unchanged
        );
        assert_eq!(
            reconcile(&board, &dragged, &onto_card("z")),
            Reconciled::Unchanged
        );
    }
}
