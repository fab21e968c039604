//! Whole-store consistency check.
//!
//! Walks every collection and reports each broken relationship. A store that
//! has only been mutated through its operations always reports nothing.

use crate::store::BoardStore;
use crate::types::EntityKind;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One broken relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityViolation {
    pub kind: EntityKind,
    pub id: String,
    pub problem: String,
}

impl IntegrityViolation {
    fn new(kind: EntityKind, id: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.id, self.problem)
    }
}

impl BoardStore {
    /// Check every invariant and list what is broken
    pub fn verify_integrity(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();
        self.check_workspaces(&mut violations);
        self.check_boards(&mut violations);
        self.check_lists(&mut violations);
        self.check_cards(&mut violations);
        self.check_comments(&mut violations);
        violations
    }

    fn check_workspaces(&self, out: &mut Vec<IntegrityViolation>) {
        for workspace in self.workspaces() {
            let id = workspace.id.as_str();
            for dup in workspace.board_ids.duplicates() {
                out.push(IntegrityViolation::new(
                    EntityKind::Workspace,
                    id,
                    format!("board {dup} listed more than once"),
                ));
            }
            for board_id in &workspace.board_ids {
                match self.board(board_id) {
                    None => out.push(IntegrityViolation::new(
                        EntityKind::Workspace,
                        id,
                        format!("dangling board {board_id}"),
                    )),
                    Some(board) if board.workspace_id.as_ref() != Some(&workspace.id) => {
                        out.push(IntegrityViolation::new(
                            EntityKind::Workspace,
                            id,
                            format!("board {board_id} points at a different workspace"),
                        ))
                    }
                    Some(_) => {}
                }
            }
            if workspace.members.has_duplicates() {
                out.push(IntegrityViolation::new(
                    EntityKind::Workspace,
                    id,
                    "duplicate member",
                ));
            }
        }
    }

    fn check_boards(&self, out: &mut Vec<IntegrityViolation>) {
        for board in self.boards() {
            let id = board.id.as_str();
            if let Some(workspace_id) = &board.workspace_id {
                let listed = self
                    .workspace(workspace_id)
                    .map(|w| w.board_ids.contains(&board.id))
                    .unwrap_or(false);
                if !listed {
                    out.push(IntegrityViolation::new(
                        EntityKind::Board,
                        id,
                        format!("not in the board sequence of workspace {workspace_id}"),
                    ));
                }
            }
            for dup in board.list_ids.duplicates() {
                out.push(IntegrityViolation::new(
                    EntityKind::Board,
                    id,
                    format!("list {dup} listed more than once"),
                ));
            }
            for list_id in &board.list_ids {
                if self.list(list_id).map(|l| &l.board_id) != Some(&board.id) {
                    out.push(IntegrityViolation::new(
                        EntityKind::Board,
                        id,
                        format!("list {list_id} is missing or belongs elsewhere"),
                    ));
                }
            }
            if board.members.has_duplicates() {
                out.push(IntegrityViolation::new(EntityKind::Board, id, "duplicate member"));
            }
        }
    }

    fn check_lists(&self, out: &mut Vec<IntegrityViolation>) {
        for list in self.lists() {
            let id = list.id.as_str();
            let occurrences = self
                .board(&list.board_id)
                .map(|b| b.list_ids.iter().filter(|l| *l == &list.id).count())
                .unwrap_or(0);
            if occurrences != 1 {
                out.push(IntegrityViolation::new(
                    EntityKind::List,
                    id,
                    format!(
                        "appears {occurrences} times in board {}",
                        list.board_id
                    ),
                ));
            }
            for dup in list.card_ids.duplicates() {
                out.push(IntegrityViolation::new(
                    EntityKind::List,
                    id,
                    format!("card {dup} listed more than once"),
                ));
            }
            for card_id in &list.card_ids {
                if self.card(card_id).map(|c| &c.list_id) != Some(&list.id) {
                    out.push(IntegrityViolation::new(
                        EntityKind::List,
                        id,
                        format!("card {card_id} is missing or belongs elsewhere"),
                    ));
                }
            }
        }
    }

    fn check_cards(&self, out: &mut Vec<IntegrityViolation>) {
        // a card may sit in exactly one sequence
        let mut memberships: HashMap<&str, usize> = HashMap::new();
        for list in self.lists() {
            for card_id in &list.card_ids {
                *memberships.entry(card_id.as_str()).or_default() += 1;
            }
        }

        for card in self.cards() {
            let id = card.id.as_str();
            let in_own_list = self
                .list(&card.list_id)
                .map(|l| l.card_ids.contains(&card.id))
                .unwrap_or(false);
            if !in_own_list {
                out.push(IntegrityViolation::new(
                    EntityKind::Card,
                    id,
                    format!("not in the card sequence of list {}", card.list_id),
                ));
            }
            let count = memberships.get(id).copied().unwrap_or(0);
            if count > 1 {
                out.push(IntegrityViolation::new(
                    EntityKind::Card,
                    id,
                    format!("member of {count} card sequences"),
                ));
            }
            if card.assigned_users.has_duplicates() {
                out.push(IntegrityViolation::new(EntityKind::Card, id, "duplicate assignee"));
            }
        }
    }

    fn check_comments(&self, out: &mut Vec<IntegrityViolation>) {
        for comment in self.comments() {
            if self.card(&comment.card_id).is_none() {
                out.push(IntegrityViolation::new(
                    EntityKind::Comment,
                    comment.id.as_str(),
                    format!("card {} does not exist", comment.card_id),
                ));
            }
        }
    }
}
