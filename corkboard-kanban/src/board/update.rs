//! UpdateBoard command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::BoardId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Patch a board's title and/or description
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBoard {
    pub id: BoardId,
    pub title: Option<String>,
    pub description: Option<String>,
}

operation!(
    UpdateBoard,
    verb = "update",
    noun = "board",
    description = "Update a board's title or description"
);

impl UpdateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
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
        let not_found = || BoardError::BoardNotFound {
            id: self.id.to_string(),
        };
        if ctx.board(&self.id).is_none() {
            return Err(not_found());
        }
        let title = self
            .title
            .as_deref()
            .map(|t| ctx.normalize_title("title", t))
            .transpose()?;

        let board = ctx.board_mut(&self.id).ok_or_else(not_found)?;
        if let Some(title) = title {
            board.title = title;
        }
        if let Some(description) = &self.description {
            board.description = description.clone();
        }
        Ok(serde_json::to_value(&*board)?)
    }
}

impl Execute<BoardStore, BoardError> for UpdateBoard {
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
    fn test_update_board_title() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&UpdateBoard::new("board-1").with_title("Project Beta"))
            .unwrap();
        assert_eq!(result["title"], "Project Beta");
        assert_eq!(result["description"], "Main project board");
        // sequences are untouched by a patch
        assert_eq!(result["list_ids"], serde_json::json!(["list-1", "list-2", "list-3"]));
    }

    #[test]
    fn test_update_board_description_only() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&UpdateBoard::new("board-2").with_description(""))
            .unwrap();
        assert_eq!(result["title"], "Marketing Campaign");
        assert_eq!(result["description"], "");
    }

    #[test]
    fn test_update_missing_board() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UpdateBoard::new("board-9").with_title("x"));
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
    }
}
