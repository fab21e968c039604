//! GetUser command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::UserId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a user by id
#[derive(Debug, Deserialize, Serialize)]
pub struct GetUser {
    pub id: UserId,
}

operation!(GetUser, verb = "get", noun = "user", description = "Get a user by id");

impl GetUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let user = ctx
            .user(&self.id)
            .ok_or_else(|| BoardError::UserNotFound {
                id: self.id.to_string(),
            })?;
        Ok(serde_json::to_value(user)?)
    }
}

impl Execute<BoardStore, BoardError> for GetUser {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_user() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetUser::new("user-2")).unwrap();
        assert_eq!(result["name"], "Jane Smith");
    }

    #[test]
    fn test_get_missing_user() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetUser::new("ghost"));
        assert!(matches!(result, Err(BoardError::UserNotFound { .. })));
        // reads never reach the activity log
        assert_eq!(ctx.activity().count(), 0);
    }
}
