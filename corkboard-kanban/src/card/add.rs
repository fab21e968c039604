//! AddCard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Card, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Append a new card to the end of a list
#[derive(Debug, Deserialize, Serialize)]
pub struct AddCard {
    pub list_id: ListId,
    pub title: String,
    /// Optional description; empty when absent
    pub description: Option<String>,
}

operation!(
    AddCard,
    verb = "add",
    noun = "card",
    description = "Append a card to a list"
);

impl AddCard {
    pub fn new(list_id: impl Into<ListId>, title: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let not_found = || BoardError::ListNotFound {
            id: self.list_id.to_string(),
        };
        if ctx.list(&self.list_id).is_none() {
            return Err(not_found());
        }
        let title = ctx.normalize_title("title", &self.title)?;

        let mut card = Card::new(title, self.list_id.clone())
            .with_description(self.description.clone().unwrap_or_default());
        card.id = ctx.fresh_card_id();
        let list = ctx.list_mut(&self.list_id).ok_or_else(not_found)?;
        let position = list.card_ids.append(card.id.clone());

        debug!(card = %card.id, list = %self.list_id, position, "creating card");
        let mut value = serde_json::to_value(&card)?;
        value["position"] = position.into();
        ctx.insert_card(card);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids: Vec<String> = result["id"].as_str().map(String::from).into_iter().collect();
        ids.push(self.list_id.to_string());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardId;

    #[test]
    fn test_add_card() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&AddCard::new("list-2", "Write docs").with_description("API docs"))
            .unwrap();

        assert_eq!(result["title"], "Write docs");
        assert_eq!(result["description"], "API docs");
        assert_eq!(result["list_id"], "list-2");
        assert_eq!(result["position"], 1);
        assert_eq!(result["assigned_users"], serde_json::json!([]));

        let id = CardId::from(result["id"].as_str().unwrap());
        assert_eq!(ctx.card_position(&id), Some(1));
    }

    #[test]
    fn test_add_card_defaults() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddCard::new("list-3", "")).unwrap();
        assert_eq!(result["title"], "Untitled");
        assert_eq!(result["description"], "");
    }

    #[test]
    fn test_add_card_to_missing_list() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddCard::new("list-0", "Nowhere"));
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
        assert_eq!(ctx.count(crate::types::EntityKind::Card), 5);
    }
}
