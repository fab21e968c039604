//! ListUsers command

use crate::error::BoardError;
use crate::store::BoardStore;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List every user
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListUsers {}

operation!(ListUsers, verb = "list", noun = "users", description = "List all users");

impl ListUsers {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardStore, BoardError> for ListUsers {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let users: Vec<_> = ctx.users().collect();
        let current = ctx.current_user().map(|u| u.id.clone());
        ExecutionResult::Unlogged {
            value: serde_json::json!({
                "users": users,
                "count": users.len(),
                "current_user": current,
            }),
        }
    }
}
