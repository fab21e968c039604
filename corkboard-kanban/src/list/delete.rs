//! DeleteList command

use crate::cascade::{self, CascadeReport};
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Delete a list, its cards and their comments, detaching it from its board
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteList {
    pub id: ListId,
}

operation!(
    DeleteList,
    verb = "delete",
    noun = "list",
    description = "Delete a list and its cards"
);

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let board_id = ctx.list(&self.id).map(|l| l.board_id.clone());
        let mut report = CascadeReport::default();
        cascade::remove_list(ctx, &self.id, &mut report);
        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id,
            "board_id": board_id,
            "removed": report,
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteList {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.list(&self.id).is_none() {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string()];
        ids.extend(result["board_id"].as_str().map(String::from));
        ids
    }
}
