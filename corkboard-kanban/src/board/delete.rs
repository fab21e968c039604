//! DeleteBoard command

use crate::cascade::{self, CascadeReport};
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Delete a board with its lists, their cards and those cards' comments.
///
/// Deleting a board that is already gone does nothing.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    pub id: BoardId,
}

operation!(
    DeleteBoard,
    verb = "delete",
    noun = "board",
    description = "Delete a board and everything on it"
);

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let workspace_id = ctx.board(&self.id).and_then(|b| b.workspace_id.clone());
        let mut report = CascadeReport::default();
        cascade::remove_board(ctx, &self.id, &mut report);
        info!(board = %self.id, removed = report.total(), "deleted board");
        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id,
            "workspace_id": workspace_id,
            "removed": report,
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.board(&self.id).is_none() {
            debug!(board = %self.id, "delete board: already absent");
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string()];
        ids.extend(result["workspace_id"].as_str().map(String::from));
        ids
    }
}
