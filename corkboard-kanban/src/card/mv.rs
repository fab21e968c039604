//! MoveCard command

use crate::error::{BoardError, Result};
use crate::ordering::clamp_index;
use crate::store::BoardStore;
use crate::types::{CardId, ListId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Move a card to an index in a list, which may be its current list.
///
/// The card leaves its source sequence, enters the target sequence at the
/// clamped index, and its `list_id` follows in the same step. An unknown card
/// or target list leaves everything as it was.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveCard {
    pub id: CardId,
    /// Destination list
    pub list_id: ListId,
    /// Target index in the destination's card sequence
    pub position: i64,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to a position in a list"
);

impl MoveCard {
    pub fn new(id: impl Into<CardId>, list_id: impl Into<ListId>, position: i64) -> Self {
        Self {
            id: id.into(),
            list_id: list_id.into(),
            position,
        }
    }

    /// Move to the end of `list_id`
    pub fn to_end(id: impl Into<CardId>, list_id: impl Into<ListId>) -> Self {
        Self::new(id, list_id, i64::MAX)
    }

    /// The index the card would land on if it stays in its own list
    fn unchanged_slot(&self, ctx: &BoardStore) -> Option<usize> {
        let card = ctx.card(&self.id)?;
        if card.list_id != self.list_id {
            return None;
        }
        let list = ctx.list(&card.list_id)?;
        let from = list.card_ids.position(&self.id)?;
        // removal shortens the sequence by one before the clamp
        (clamp_index(self.position, list.card_ids.len() - 1) == from).then_some(from)
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let from_list = ctx
            .card(&self.id)
            .map(|c| c.list_id.clone())
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;
        if ctx.list(&self.list_id).is_none() {
            return Err(BoardError::ListNotFound {
                id: self.list_id.to_string(),
            });
        }

        let from = ctx
            .list_mut(&from_list)
            .and_then(|list| list.card_ids.remove(&self.id));
        let target = ctx
            .list_mut(&self.list_id)
            .ok_or_else(|| BoardError::ListNotFound {
                id: self.list_id.to_string(),
            })?;
        let position = target.card_ids.insert_clamped(self.id.clone(), self.position);
        if let Some(card) = ctx.card_mut(&self.id) {
            card.list_id = self.list_id.clone();
        }

        debug!(card = %self.id, from = %from_list, to = %self.list_id, position, "moved card");
        Ok(serde_json::json!({
            "id": self.id,
            "from_list": from_list,
            "from": from,
            "list_id": self.list_id,
            "position": position,
        }))
    }
}

impl Execute<BoardStore, BoardError> for MoveCard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.card(&self.id).is_none() || ctx.list(&self.list_id).is_none() {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "moved": false, "id": self.id }),
            };
        }
        if let Some(position) = self.unchanged_slot(ctx) {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({
                    "id": self.id,
                    "from_list": self.list_id,
                    "from": position,
                    "list_id": self.list_id,
                    "position": position,
                }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        let mut ids = vec![self.id.to_string(), self.list_id.to_string()];
        if let Some(from) = result["from_list"].as_str() {
            if from != self.list_id.as_str() {
                ids.push(from.to_string());
            }
        }
        ids
    }
}
