//! AddBoard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Board, WorkspaceId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Create a board, appended to its workspace's board sequence.
///
/// Without a workspace the board is a personal board. Naming a workspace
/// that does not exist creates nothing. The acting user, if any, becomes its
/// first member.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoard {
    /// Owning workspace; `None` creates a personal board
    pub workspace_id: Option<WorkspaceId>,
    /// The board title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
}

operation!(
    AddBoard,
    verb = "add",
    noun = "board",
    description = "Create a new board"
);

impl AddBoard {
    /// Create a personal board
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            workspace_id: None,
            title: title.into(),
            description: None,
        }
    }

    pub fn in_workspace(mut self, workspace_id: impl Into<WorkspaceId>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let title = ctx.normalize_title("title", &self.title)?;

        let mut board =
            Board::new(title).with_description(self.description.clone().unwrap_or_default());
        board.id = ctx.fresh_board_id();
        board.workspace_id = self.workspace_id.clone();
        if let Some(user) = ctx.current_user() {
            board.members.insert(user.id.clone());
        }

        let mut position = None;
        if let Some(workspace) = self
            .workspace_id
            .as_ref()
            .and_then(|id| ctx.workspace_mut(id))
        {
            position = Some(workspace.board_ids.append(board.id.clone()));
        }

        debug!(board = %board.id, workspace = ?board.workspace_id, "creating board");
        let mut value = serde_json::to_value(&board)?;
        if let Some(position) = position {
            value["position"] = position.into();
        }
        ctx.insert_board(board);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if let Some(workspace_id) = &self.workspace_id {
            if ctx.workspace(workspace_id).is_none() {
                return ExecutionResult::Unlogged {
                    value: serde_json::json!({ "added": false, "workspace_id": workspace_id }),
                };
            }
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids: Vec<String> = result["id"].as_str().map(String::from).into_iter().collect();
        ids.extend(self.workspace_id.iter().map(WorkspaceId::to_string));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardId;

    #[test]
    fn test_add_board_to_workspace() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&AddBoard::new("Roadmap").in_workspace("workspace-1"))
            .unwrap();

        assert_eq!(result["title"], "Roadmap");
        assert_eq!(result["description"], "");
        assert_eq!(result["position"], 1);
        assert_eq!(result["members"], serde_json::json!(["user-1"]));

        let id = BoardId::from(result["id"].as_str().unwrap());
        let workspace = ctx.workspace(&WorkspaceId::from("workspace-1")).unwrap();
        assert_eq!(workspace.board_ids.as_slice(), [BoardId::from("board-1"), id]);
    }

    #[test]
    fn test_add_personal_board() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddBoard::new("Scratch")).unwrap();
        assert!(result.get("workspace_id").is_none());
        assert!(result.get("position").is_none());
        assert!(ctx.verify_integrity().is_empty());
    }

    #[test]
    fn test_add_board_blank_title_uses_placeholder() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddBoard::new("   ")).unwrap();
        assert_eq!(result["title"], "Untitled");
    }

    #[test]
    fn test_add_board_to_missing_workspace_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        let before = ctx.count(crate::types::EntityKind::Board);
        let result = ctx
            .dispatch(&AddBoard::new("Lost").in_workspace("workspace-9"))
            .unwrap();

        assert_eq!(result["added"], false);
        assert_eq!(ctx.count(crate::types::EntityKind::Board), before);
        assert_eq!(ctx.activity().count(), 0);
        assert_eq!(ctx.revision(), 0);
    }
}
