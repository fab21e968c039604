//! DeleteCard command

use crate::cascade::{self, CascadeReport};
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::CardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Delete a card and its comments
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteCard {
    pub id: CardId,
}

operation!(
    DeleteCard,
    verb = "delete",
    noun = "card",
    description = "Delete a card and its comments"
);

impl DeleteCard {
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let list_id = ctx.card(&self.id).map(|c| c.list_id.clone());
        let mut report = CascadeReport::default();
        cascade::remove_card(ctx, &self.id, &mut report);
        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id,
            "list_id": list_id,
            "removed": report,
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.card(&self.id).is_none() {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string()];
        ids.extend(result["list_id"].as_str().map(String::from));
        ids
    }
}
