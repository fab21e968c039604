//! GetBoard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a board with its lists and their cards, all in display order
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoard {
    pub id: BoardId,
}

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get a board with its lists and cards"
);

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let board = ctx.board(&self.id).ok_or_else(|| BoardError::BoardNotFound {
            id: self.id.to_string(),
        })?;

        let mut lists = Vec::with_capacity(board.list_ids.len());
        for (position, list) in ctx.lists_of(&board.id).into_iter().enumerate() {
            let mut cards = Vec::with_capacity(list.card_ids.len());
            for (card_position, card) in ctx.cards_of(&list.id).into_iter().enumerate() {
                let mut value = serde_json::to_value(card)?;
                value["position"] = card_position.into();
                cards.push(value);
            }
            let mut value = serde_json::to_value(list)?;
            value["position"] = position.into();
            value["cards"] = Value::Array(cards);
            lists.push(value);
        }

        let mut value = serde_json::to_value(board)?;
        value["lists"] = Value::Array(lists);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}
