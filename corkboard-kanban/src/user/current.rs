//! SetCurrentUser command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::UserId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Set (or clear) the acting user that authorship-requiring operations use
#[derive(Debug, Deserialize, Serialize)]
pub struct SetCurrentUser {
    /// The user to act as; `None` clears the acting user
    pub user_id: Option<UserId>,
}

operation!(
    SetCurrentUser,
    verb = "set",
    noun = "current user",
    description = "Set or clear the acting user"
);

impl SetCurrentUser {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Clear the acting user
    pub fn clear() -> Self {
        Self { user_id: None }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if let Some(id) = &self.user_id {
            if ctx.user(id).is_none() {
                return Err(BoardError::UserNotFound { id: id.to_string() });
            }
        }
        ctx.set_current_user(self.user_id.clone());
        Ok(serde_json::json!({ "current_user": self.user_id }))
    }
}

impl Execute<BoardStore, BoardError> for SetCurrentUser {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let current = ctx.current_user().map(|u| u.id.clone());
        if current == self.user_id {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "current_user": current }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        self.user_id.iter().map(UserId::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_and_clear_user() {
        let mut ctx = BoardStore::with_demo_data();

        ctx.dispatch(&SetCurrentUser::new("user-3")).unwrap();
        assert_eq!(ctx.current_user().unwrap().id, "user-3");

        ctx.dispatch(&SetCurrentUser::clear()).unwrap();
        assert!(ctx.current_user().is_none());
    }

    #[test]
    fn test_unknown_user_rejected() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&SetCurrentUser::new("ghost"));
        assert!(matches!(result, Err(BoardError::UserNotFound { .. })));
        assert_eq!(ctx.current_user().unwrap().id, "user-1");
    }
}
