//! UpdateCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Patch a card's title and/or description.
///
/// Every field is validated before any is written.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateCard {
    pub id: CardId,
    pub title: Option<String>,
    pub description: Option<String>,
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Update a card's title or description"
);

impl UpdateCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let not_found = || BoardError::CardNotFound {
            id: self.id.to_string(),
        };
        if ctx.card(&self.id).is_none() {
            return Err(not_found());
        }
        let title = self
            .title
            .as_deref()
            .map(|t| ctx.normalize_title("title", t))
            .transpose()?;

        let card = ctx.card_mut(&self.id).ok_or_else(not_found)?;
        if let Some(title) = title {
            card.title = title;
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        Ok(serde_json::to_value(&*card)?)
    }
}

impl Execute<BoardStore, BoardError> for UpdateCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_card_fields() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(
                &UpdateCard::new("card-1")
                    .with_title("Setup monorepo")
                    .with_description("Cargo workspace"),
            )
            .unwrap();

        assert_eq!(result["title"], "Setup monorepo");
        assert_eq!(result["description"], "Cargo workspace");
        assert_eq!(result["list_id"], "list-1");
    }

    #[test]
    fn test_update_card_rejects_long_title_atomically() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(
            &UpdateCard::new("card-1")
                .with_title("t".repeat(600))
                .with_description("should not land"),
        );

        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
        let card = ctx.card(&CardId::from("card-1")).unwrap();
        assert_eq!(card.description, "Initialize the project with proper folder structure");
    }

    #[test]
    fn test_update_missing_card() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UpdateCard::new("card-0").with_title("x"));
        assert!(matches!(result, Err(BoardError::CardNotFound { .. })));
    }
}
