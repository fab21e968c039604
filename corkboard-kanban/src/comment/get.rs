//! GetComment command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CommentId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a comment by id
#[derive(Debug, Deserialize, Serialize)]
pub struct GetComment {
    pub id: CommentId,
}

operation!(
    GetComment,
    verb = "get",
    noun = "comment",
    description = "Get a comment by id"
);

impl GetComment {
    pub fn new(id: impl Into<CommentId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let comment = ctx
            .comment(&self.id)
            .ok_or_else(|| BoardError::CommentNotFound {
                id: self.id.to_string(),
            })?;
        Ok(serde_json::to_value(comment)?)
    }
}

impl Execute<BoardStore, BoardError> for GetComment {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::{AddComment, DeleteComment};

    #[test]
    fn test_get_comment_until_deleted() {
        let mut ctx = BoardStore::with_demo_data();
        let added = ctx.dispatch(&AddComment::new("card-2", "ship it")).unwrap();
        let id = added["id"].as_str().unwrap().to_string();

        let result = ctx.dispatch(&GetComment::new(id.as_str())).unwrap();
        assert_eq!(result["content"], "ship it");

        ctx.dispatch(&DeleteComment::new(id.as_str())).unwrap();
        let result = ctx.dispatch(&GetComment::new(id.as_str()));
        assert!(matches!(result, Err(BoardError::CommentNotFound { .. })));
    }
}
