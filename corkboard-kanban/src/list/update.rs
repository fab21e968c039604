//! UpdateList command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::ListId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Rename a list
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateList {
    pub id: ListId,
    pub title: Option<String>,
}

operation!(
    UpdateList,
    verb = "update",
    noun = "list",
    description = "Rename a list"
);

impl UpdateList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.list(&self.id).is_none() {
            return Err(BoardError::ListNotFound {
                id: self.id.to_string(),
            });
        }
        let title = self
            .title
            .as_deref()
            .map(|t| ctx.normalize_title("title", t))
            .transpose()?;

        let position = ctx.list_position(&self.id);
        let list = ctx.list_mut(&self.id).ok_or_else(|| BoardError::ListNotFound {
            id: self.id.to_string(),
        })?;
        if let Some(title) = title {
            list.title = title;
        }
        let mut value = serde_json::to_value(&*list)?;
        value["position"] = serde_json::json!(position);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for UpdateList {
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
    fn test_rename_list() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&UpdateList::new("list-2").with_title("Doing"))
            .unwrap();
        assert_eq!(result["title"], "Doing");
        assert_eq!(result["position"], 1);
    }

    #[test]
    fn test_rename_missing_list() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UpdateList::new("list-0").with_title("x"));
        assert!(matches!(result, Err(BoardError::ListNotFound { .. })));
    }
}
