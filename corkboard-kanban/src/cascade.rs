//! Cascade removal of containers and everything beneath them.
//!
//! Each function removes one entity, recursively removes its descendants, and
//! detaches it from its parent's child sequence. All of them tolerate ids that
//! are already gone, so overlapping cascades never fail.

use crate::store::BoardStore;
use crate::types::{BoardId, CardId, ListId, WorkspaceId};
use serde::Serialize;
use tracing::debug;

/// How many entities of each kind a cascade removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub workspaces: usize,
    pub boards: usize,
    pub lists: usize,
    pub cards: usize,
    pub comments: usize,
}

impl CascadeReport {
    /// Total entities removed
    pub fn total(&self) -> usize {
        self.workspaces + self.boards + self.lists + self.cards + self.comments
    }
}

/// Remove a card and its comments, detaching it from its list
pub(crate) fn remove_card(store: &mut BoardStore, id: &CardId, report: &mut CascadeReport) -> bool {
    let Some(card) = store.remove_card(id) else {
        return false;
    };
    if let Some(list) = store.list_mut(&card.list_id) {
        list.card_ids.remove(id);
    }
    report.comments += store.remove_comments_on(id);
    report.cards += 1;
    true
}

/// Remove a list and its cards, detaching it from its board
pub(crate) fn remove_list(store: &mut BoardStore, id: &ListId, report: &mut CascadeReport) -> bool {
    let Some(list) = store.remove_list(id) else {
        return false;
    };
    for card_id in &list.card_ids {
        remove_card(store, card_id, report);
    }
    if let Some(board) = store.board_mut(&list.board_id) {
        board.list_ids.remove(id);
    }
    report.lists += 1;
    debug!(list = %id, cards = list.card_ids.len(), "removed list");
    true
}

/// Remove a board and its lists, detaching it from its workspace
pub(crate) fn remove_board(store: &mut BoardStore, id: &BoardId, report: &mut CascadeReport) -> bool {
    let Some(board) = store.remove_board(id) else {
        return false;
    };
    for list_id in &board.list_ids {
        remove_list(store, list_id, report);
    }
    if let Some(workspace_id) = &board.workspace_id {
        if let Some(workspace) = store.workspace_mut(workspace_id) {
            workspace.board_ids.remove(id);
        }
    }
    report.boards += 1;
    debug!(board = %id, lists = board.list_ids.len(), "removed board");
    true
}

/// Remove a workspace and every board it owns
pub(crate) fn remove_workspace(
    store: &mut BoardStore,
    id: &WorkspaceId,
    report: &mut CascadeReport,
) -> bool {
    let Some(workspace) = store.remove_workspace(id) else {
        return false;
    };
    for board_id in &workspace.board_ids {
        remove_board(store, board_id, report);
    }
    report.workspaces += 1;
    debug!(workspace = %id, boards = workspace.board_ids.len(), "removed workspace");
    true
}
