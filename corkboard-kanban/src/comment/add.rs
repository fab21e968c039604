//! AddComment command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{CardId, Comment};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Comment on a card as the acting user.
///
/// With no acting user set nothing happens: a comment must have an author.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddComment {
    pub card_id: CardId,
    pub content: String,
}

operation!(
    AddComment,
    verb = "add",
    noun = "comment",
    description = "Comment on a card"
);

impl AddComment {
    pub fn new(card_id: impl Into<CardId>, content: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            content: content.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let author = ctx.require_current_user()?;
        if ctx.card(&self.card_id).is_none() {
            return Err(BoardError::CardNotFound {
                id: self.card_id.to_string(),
            });
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(BoardError::invalid_value("content", "comment cannot be empty"));
        }

        let mut comment = Comment::new(self.card_id.clone(), author, content);
        comment.id = ctx.fresh_comment_id();
        let value = serde_json::to_value(&comment)?;
        ctx.insert_comment(comment);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddComment {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.current_user().is_none() {
            debug!(card = %self.card_id, "add comment skipped: no acting user");
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "added": false, "card_id": self.card_id }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids: Vec<String> = result["id"].as_str().map(String::from).into_iter().collect();
        ids.push(self.card_id.to_string());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityKind;
    use crate::user::SetCurrentUser;

    #[test]
    fn test_add_comment_as_acting_user() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&SetCurrentUser::new("user-2")).unwrap();

        let result = ctx
            .dispatch(&AddComment::new("card-3", "  Blocked on review  "))
            .unwrap();

        assert_eq!(result["author"], "user-2");
        assert_eq!(result["content"], "Blocked on review");
        assert_eq!(result["card_id"], "card-3");
        assert_eq!(ctx.count(EntityKind::Comment), 1);
    }

    #[test]
    fn test_add_comment_without_acting_user_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&SetCurrentUser::clear()).unwrap();
        let revision = ctx.revision();

        let result = ctx.dispatch(&AddComment::new("card-3", "hello")).unwrap();

        assert_eq!(result["added"], false);
        assert_eq!(ctx.count(EntityKind::Comment), 0);
        assert_eq!(ctx.revision(), revision);
    }

    #[test]
    fn test_add_comment_on_missing_card() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddComment::new("card-99", "hello"));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }

    #[test]
    fn test_add_blank_comment() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddComment::new("card-1", " \n "));
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
    }
}
