//! UnassignCard command

use crate::error::BoardError;
use crate::store::BoardStore;
use crate::types::{CardId, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Remove a user from a card's assignees.
///
/// Unknown cards and users who are not assigned are both no-ops.
#[derive(Debug, Deserialize, Serialize)]
pub struct UnassignCard {
    pub id: CardId,
    pub user_id: UserId,
}

operation!(
    UnassignCard,
    verb = "unassign",
    noun = "card",
    description = "Remove a user from a card"
);

impl UnassignCard {
    pub fn new(id: impl Into<CardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
        }
    }
}

impl Execute<BoardStore, BoardError> for UnassignCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let Some(card) = ctx.card_mut(&self.id) else {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "id": self.id, "unassigned": false }),
            };
        };
        if !card.assigned_users.remove(&self.user_id) {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({
                    "id": self.id,
                    "unassigned": false,
                    "assigned_users": card.assigned_users,
                }),
            };
        }
        let value = serde_json::json!({
            "id": self.id,
            "unassigned": true,
            "assigned_users": card.assigned_users,
        });
        ExecutionResult::record(self, started, Ok(value))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string(), self.user_id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassign() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UnassignCard::new("card-3", "user-1")).unwrap();
        assert_eq!(result["unassigned"], true);
        assert_eq!(result["assigned_users"], serde_json::json!(["user-2"]));
    }

    #[test]
    fn test_unassign_non_assignee_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UnassignCard::new("card-1", "user-3")).unwrap();
        assert_eq!(result["unassigned"], false);
        assert_eq!(result["assigned_users"], serde_json::json!(["user-1"]));
        assert_eq!(ctx.revision(), 0);
    }

    #[test]
    fn test_unassign_on_missing_card_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UnassignCard::new("card-0", "user-1")).unwrap();
        assert_eq!(result["unassigned"], false);
    }
}
