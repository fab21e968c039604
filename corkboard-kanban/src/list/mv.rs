//! MoveList command

use crate::error::{BoardError, Result};
use crate::ordering::clamp_index;
use crate::store::BoardStore;
use crate::types::ListId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Reorder a list within its board. Out-of-range positions clamp.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveList {
    pub id: ListId,
    /// Target index in the board's list sequence
    pub position: i64,
}

operation!(
    MoveList,
    verb = "move",
    noun = "list",
    description = "Reorder a list within its board"
);

impl MoveList {
    pub fn new(id: impl Into<ListId>, position: i64) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// Current index and the length of the board's list sequence
    fn current_slot(&self, ctx: &BoardStore) -> Option<(usize, usize)> {
        let list = ctx.list(&self.id)?;
        let board = ctx.board(&list.board_id)?;
        Some((board.list_ids.position(&self.id)?, board.list_ids.len()))
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let board_id = ctx
            .list(&self.id)
            .map(|l| l.board_id.clone())
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.id.to_string(),
            })?;
        let board = ctx
            .board_mut(&board_id)
            .ok_or_else(|| BoardError::BoardNotFound {
                id: board_id.to_string(),
            })?;
        let from = board.list_ids.position(&self.id);
        let to = board
            .list_ids
            .move_to(&self.id, self.position)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.id.to_string(),
            })?;

        Ok(serde_json::json!({
            "id": self.id,
            "board_id": board_id,
            "from": from,
            "position": to,
            "list_ids": board.list_ids,
        }))
    }
}

impl Execute<BoardStore, BoardError> for MoveList {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if let Some((from, siblings)) = self.current_slot(ctx) {
            // removal shortens the sequence by one before the clamp
            if clamp_index(self.position, siblings - 1) == from {
                return ExecutionResult::Unlogged {
                    value: serde_json::json!({ "id": self.id, "from": from, "position": from }),
                };
            }
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string()];
        ids.extend(result["board_id"].as_str().map(String::from));
        ids
    }
}
