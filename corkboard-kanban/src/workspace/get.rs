//! GetWorkspace command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::WorkspaceId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a workspace with summaries of its boards in order
#[derive(Debug, Deserialize, Serialize)]
pub struct GetWorkspace {
    pub id: WorkspaceId,
}

operation!(
    GetWorkspace,
    verb = "get",
    noun = "workspace",
    description = "Get a workspace and its boards"
);

impl GetWorkspace {
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let workspace = ctx
            .workspace(&self.id)
            .ok_or_else(|| BoardError::WorkspaceNotFound {
                id: self.id.to_string(),
            })?;

        let boards: Vec<Value> = workspace
            .board_ids
            .iter()
            .filter_map(|id| ctx.board(id))
            .map(|b| {
                serde_json::json!({
                    "id": b.id,
                    "title": b.title,
                    "list_count": b.list_ids.len(),
                })
            })
            .collect();

        let mut value = serde_json::to_value(workspace)?;
        value["boards"] = Value::Array(boards);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for GetWorkspace {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_workspace() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetWorkspace::new("workspace-1")).unwrap();

        assert_eq!(result["name"], "Engineering");
        assert_eq!(result["boards"][0]["id"], "board-1");
        assert_eq!(result["boards"][0]["list_count"], 3);
    }

    #[test]
    fn test_get_missing_workspace() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetWorkspace::new("workspace-9"));
        assert!(matches!(result, Err(BoardError::WorkspaceNotFound { .. })));
    }
}
