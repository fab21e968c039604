//! GetCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a card with its position and comments
#[derive(Debug, Deserialize, Serialize)]
pub struct GetCard {
    pub id: CardId,
}

operation!(
    GetCard,
    verb = "get",
    noun = "card",
    description = "Get a card with its comments"
);

impl GetCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let card = ctx.card(&self.id).ok_or_else(|| BoardError::CardNotFound {
            id: self.id.to_string(),
        })?;
        let comments = ctx
            .comments_of(&card.id)
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut value = serde_json::to_value(card)?;
        value["position"] = serde_json::json!(ctx.card_position(&card.id));
        value["comments"] = Value::Array(comments);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for GetCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::AddComment;

    #[test]
    fn test_get_card_with_comments() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&AddComment::new("card-2", "Looks good")).unwrap();

        let result = ctx.dispatch(&GetCard::new("card-2")).unwrap();

        assert_eq!(result["position"], 1);
        assert_eq!(result["comments"][0]["content"], "Looks good");
        assert_eq!(result["comments"][0]["author"], "user-1");
    }

    #[test]
    fn test_get_missing_card() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetCard::new("card-6"));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }
}
