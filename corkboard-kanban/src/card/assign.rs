//! AssignCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{CardId, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Assign a user to a card. Assigning an assignee again does nothing.
#[derive(Debug, Deserialize, Serialize)]
pub struct AssignCard {
    pub id: CardId,
    pub user_id: UserId,
}

operation!(
    AssignCard,
    verb = "assign",
    noun = "card",
    description = "Assign a user to a card"
);

impl AssignCard {
    pub fn new(id: impl Into<CardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.user(&self.user_id).is_none() {
            return Err(BoardError::UserNotFound {
                id: self.user_id.to_string(),
            });
        }
        let card = ctx.card_mut(&self.id).ok_or_else(|| BoardError::CardNotFound {
            id: self.id.to_string(),
        })?;
        card.assigned_users.insert(self.user_id.clone());
        Ok(serde_json::json!({
            "id": self.id,
            "assigned_users": card.assigned_users,
        }))
    }
}

impl Execute<BoardStore, BoardError> for AssignCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if let Some(card) = ctx.card(&self.id) {
            if card.is_assigned(&self.user_id) {
                return ExecutionResult::Unlogged {
                    value: serde_json::json!({
                        "id": self.id,
                        "assigned_users": card.assigned_users,
                    }),
                };
            }
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string(), self.user_id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_twice_keeps_one_entry() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&AssignCard::new("card-5", "user-2")).unwrap();
        let result = ctx.dispatch(&AssignCard::new("card-5", "user-2")).unwrap();

        assert_eq!(result["assigned_users"], serde_json::json!(["user-3", "user-2"]));
        assert_eq!(ctx.activity().count(), 1);
    }

    #[test]
    fn test_assign_unknown_user() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AssignCard::new("card-1", "user-9"));
        assert!(matches!(result, Err(BoardError::UserNotFound { .. })));
    }

    #[test]
    fn test_assign_on_missing_card() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AssignCard::new("card-9", "user-1"));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }
}
