//! SetCurrentWorkspace command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, WorkspaceId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Focus a workspace, or clear the focus.
///
/// The current workspace is what navigation narrows its board list to. It is
/// cleared automatically when that workspace is deleted.
#[derive(Debug, Deserialize, Serialize)]
pub struct SetCurrentWorkspace {
    pub workspace_id: Option<WorkspaceId>,
}

operation!(
    SetCurrentWorkspace,
    verb = "set",
    noun = "current workspace",
    description = "Set or clear the focused workspace"
);

impl SetCurrentWorkspace {
    pub fn new(workspace_id: impl Into<WorkspaceId>) -> Self {
        Self {
            workspace_id: Some(workspace_id.into()),
        }
    }

    pub fn clear() -> Self {
        Self { workspace_id: None }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if let Some(id) = &self.workspace_id {
            if ctx.workspace(id).is_none() {
                return Err(BoardError::WorkspaceNotFound { id: id.to_string() });
            }
        }
        ctx.set_current_workspace(self.workspace_id.clone());
        let boards: Vec<BoardId> = ctx
            .current_workspace()
            .map(|w| w.board_ids.iter().cloned().collect())
            .unwrap_or_default();
        Ok(serde_json::json!({
            "current_workspace": self.workspace_id,
            "board_ids": boards,
        }))
    }
}

impl Execute<BoardStore, BoardError> for SetCurrentWorkspace {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let current = ctx.current_workspace().map(|w| w.id.clone());
        if current == self.workspace_id {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "current_workspace": current }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        self.workspace_id.iter().map(WorkspaceId::to_string).collect()
    }
}
