//! Container types: Workspace, Board, List

use super::id_set::IdSet;
use super::ids::{BoardId, CardId, ListId, UserId, WorkspaceId};
use crate::ordering::ChildSequence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workspace groups boards and a set of members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub members: IdSet<UserId>,
    /// Boards in display order
    #[serde(default)]
    pub board_ids: ChildSequence<BoardId>,
}

impl Workspace {
    /// Create an empty workspace with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            description: String::new(),
            created_at: Utc::now(),
            members: IdSet::new(),
            board_ids: ChildSequence::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A board owns an ordered sequence of lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub members: IdSet<UserId>,
    /// Lists in display order
    #[serde(default)]
    pub list_ids: ChildSequence<ListId>,
    /// Owning workspace; `None` for a personal board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
}

impl Board {
    /// Create an empty board with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            description: String::new(),
            created_at: Utc::now(),
            members: IdSet::new(),
            list_ids: ChildSequence::new(),
            workspace_id: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the owning workspace
    pub fn in_workspace(mut self, workspace_id: impl Into<WorkspaceId>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }
}

/// A list (column) on a board, owning an ordered sequence of cards.
///
/// Its position is its index in the board's `list_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub board_id: BoardId,
    /// Cards in display order
    #[serde(default)]
    pub card_ids: ChildSequence<CardId>,
}

impl List {
    /// Create an empty list on `board_id` with a fresh id
    pub fn new(title: impl Into<String>, board_id: impl Into<BoardId>) -> Self {
        Self {
            id: ListId::new(),
            title: title.into(),
            board_id: board_id.into(),
            card_ids: ChildSequence::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new("Roadmap").with_description("Q3");
        assert_eq!(board.title, "Roadmap");
        assert_eq!(board.description, "Q3");
        assert!(board.list_ids.is_empty());
        assert!(board.workspace_id.is_none());
    }

    #[test]
    fn test_personal_board_omits_workspace_in_json() {
        let board = Board::new("Mine");
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("workspace_id").is_none());

        let owned = Board::new("Team").in_workspace("workspace-1");
        let json = serde_json::to_value(&owned).unwrap();
        assert_eq!(json["workspace_id"], "workspace-1");
    }

    #[test]
    fn test_list_serialization() {
        let mut list = List::new("To Do", "board-1");
        list.card_ids.append(CardId::from_string("card-1"));
        let json = serde_json::to_string(&list).unwrap();
        let parsed: List = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
        assert_eq!(parsed.card_ids.as_slice(), [CardId::from_string("card-1")]);
    }
}
