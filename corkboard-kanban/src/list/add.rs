//! AddList command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, List};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Append a new, empty list to a board
#[derive(Debug, Deserialize, Serialize)]
pub struct AddList {
    pub board_id: BoardId,
    pub title: String,
}

operation!(
    AddList,
    verb = "add",
    noun = "list",
    description = "Append a list to a board"
);

impl AddList {
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.board(&self.board_id).is_none() {
            return Err(BoardError::BoardNotFound {
                id: self.board_id.to_string(),
            });
        }
        let title = ctx.normalize_title("title", &self.title)?;

        let mut list = List::new(title, self.board_id.clone());
        list.id = ctx.fresh_list_id();
        let board = ctx
            .board_mut(&self.board_id)
            .ok_or_else(|| BoardError::BoardNotFound {
                id: self.board_id.to_string(),
            })?;
        let position = board.list_ids.append(list.id.clone());

        let mut value = serde_json::to_value(&list)?;
        value["position"] = position.into();
        ctx.insert_list(list);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddList {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids: Vec<String> = result["id"].as_str().map(String::from).into_iter().collect();
        ids.push(self.board_id.to_string());
        ids
    }
}
