//! DeleteComment command

use crate::error::BoardError;
use crate::store::BoardStore;
use crate::types::CommentId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Delete a comment. Comments are leaves, so nothing cascades.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteComment {
    pub id: CommentId,
}

operation!(
    DeleteComment,
    verb = "delete",
    noun = "comment",
    description = "Delete a comment"
);

impl DeleteComment {
    pub fn new(id: impl Into<CommentId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardStore, BoardError> for DeleteComment {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        match ctx.remove_comment(&self.id) {
            None => ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            },
            Some(comment) => ExecutionResult::record(
                self,
                started,
                Ok(serde_json::json!({
                    "deleted": true,
                    "id": self.id,
                    "card_id": comment.card_id,
                })),
            ),
        }
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string()];
        ids.extend(result["card_id"].as_str().map(String::from));
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::AddComment;
    use crate::types::EntityKind;

    #[test]
    fn test_delete_comment() {
        let mut ctx = BoardStore::with_demo_data();
        let added = ctx.dispatch(&AddComment::new("card-1", "first")).unwrap();
        let id = added["id"].as_str().unwrap();

        let result = ctx.dispatch(&DeleteComment::new(id)).unwrap();

        assert_eq!(result["deleted"], true);
        assert_eq!(result["card_id"], "card-1");
        assert_eq!(ctx.count(EntityKind::Comment), 0);
        // the card itself is untouched
        assert!(ctx.contains(EntityKind::Card, "card-1"));
    }

    #[test]
    fn test_delete_missing_comment_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&DeleteComment::new("comment-1")).unwrap();
        assert_eq!(result["deleted"], false);
    }
}
