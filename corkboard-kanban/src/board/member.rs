//! Board membership commands

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{BoardId, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Add a user to a board's member set
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoardMember {
    pub board_id: BoardId,
    pub user_id: UserId,
}

operation!(
    AddBoardMember,
    verb = "add",
    noun = "board member",
    description = "Add a user to a board"
);

impl AddBoardMember {
    pub fn new(board_id: impl Into<BoardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            user_id: user_id.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.user(&self.user_id).is_none() {
            return Err(BoardError::UserNotFound {
                id: self.user_id.to_string(),
            });
        }
        let board = ctx
            .board_mut(&self.board_id)
            .ok_or_else(|| BoardError::BoardNotFound {
                id: self.board_id.to_string(),
            })?;
        board.members.insert(self.user_id.clone());
        Ok(serde_json::json!({
            "board_id": self.board_id,
            "members": board.members,
        }))
    }
}

impl Execute<BoardStore, BoardError> for AddBoardMember {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if let Some(board) = ctx.board(&self.board_id) {
            if board.members.contains(&self.user_id) {
                return ExecutionResult::Unlogged {
                    value: serde_json::json!({
                        "board_id": self.board_id,
                        "members": board.members,
                    }),
                };
            }
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.board_id.to_string(), self.user_id.to_string()]
    }
}

/// Remove a user from a board's member set. Removing a non-member does
/// nothing.
#[derive(Debug, Deserialize, Serialize)]
pub struct RemoveBoardMember {
    pub board_id: BoardId,
    pub user_id: UserId,
}

operation!(
    RemoveBoardMember,
    verb = "remove",
    noun = "board member",
    description = "Remove a user from a board"
);

impl RemoveBoardMember {
    pub fn new(board_id: impl Into<BoardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl Execute<BoardStore, BoardError> for RemoveBoardMember {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let Some(board) = ctx.board_mut(&self.board_id) else {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "removed": false }),
            };
        };
        if !board.members.remove(&self.user_id) {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "removed": false }),
            };
        }
        let value = serde_json::json!({
            "removed": true,
            "board_id": self.board_id,
            "members": board.members,
        });
        ExecutionResult::record(self, started, Ok(value))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.board_id.to_string(), self.user_id.to_string()]
    }
}
