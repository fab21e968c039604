//! GetList command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Get a list with its position and its cards in order
#[derive(Debug, Deserialize, Serialize)]
pub struct GetList {
    pub id: ListId,
}

operation!(
    GetList,
    verb = "get",
    noun = "list",
    description = "Get a list and its cards"
);

impl GetList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let list = ctx.list(&self.id).ok_or_else(|| BoardError::ListNotFound {
            id: self.id.to_string(),
        })?;
        let cards = ctx
            .cards_of(&list.id)
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut value = serde_json::to_value(list)?;
        value["position"] = serde_json::json!(ctx.list_position(&list.id));
        value["cards"] = Value::Array(cards);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for GetList {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_list() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&GetList::new("list-1")).unwrap();
        assert_eq!(result["position"], 0);
        assert_eq!(result["cards"][0]["title"], "Setup project repository");
        assert_eq!(result["cards"].as_array().unwrap().len(), 2);
    }
}
