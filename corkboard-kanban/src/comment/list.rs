//! ListComments command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List a card's comments, oldest first
#[derive(Debug, Deserialize, Serialize)]
pub struct ListComments {
    pub card_id: CardId,
}

operation!(
    ListComments,
    verb = "list",
    noun = "comments",
    description = "List the comments on a card"
);

impl ListComments {
    pub fn new(card_id: impl Into<CardId>) -> Self {
        Self {
            card_id: card_id.into(),
        }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        if ctx.card(&self.card_id).is_none() {
            return Err(BoardError::CardNotFound {
                id: self.card_id.to_string(),
            });
        }
        let comments = ctx.comments_of(&self.card_id);
        Ok(serde_json::json!({
            "card_id": self.card_id,
            "count": comments.len(),
            "comments": comments,
        }))
    }
}

impl Execute<BoardStore, BoardError> for ListComments {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}
