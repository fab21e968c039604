//! ListBoards command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Board, WorkspaceId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Sort order for board listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSort {
    /// Title, A to Z
    Az,
    /// Title, Z to A
    Za,
    /// Newest first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
}

impl BoardSort {
    fn compare(&self, a: &Board, b: &Board) -> Ordering {
        match self {
            Self::Az => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Za => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
            Self::Recent => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
        }
    }
}

/// List boards with optional workspace scope, text query and sort order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards {
    /// Only boards owned by this workspace
    pub workspace_id: Option<WorkspaceId>,
    /// Case-insensitive match against title and description
    pub query: Option<String>,
    #[serde(default)]
    pub sort: BoardSort,
}

operation!(
    ListBoards,
    verb = "list",
    noun = "boards",
    description = "List boards with filtering and sorting"
);

impl ListBoards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_workspace(mut self, workspace_id: impl Into<WorkspaceId>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sorted(mut self, sort: BoardSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, board: &Board) -> bool {
        if let Some(workspace_id) = &self.workspace_id {
            if board.workspace_id.as_ref() != Some(workspace_id) {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                board.title.to_lowercase().contains(&query)
                    || board.description.to_lowercase().contains(&query)
            }
        }
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let mut boards: Vec<&Board> = ctx.boards().filter(|b| self.matches(b)).collect();
        // stable, so ties keep creation order
        boards.sort_by(|a, b| self.sort.compare(a, b));

        let boards: Vec<Value> = boards
            .into_iter()
            .map(|b| {
                serde_json::to_value(b).map(|mut value| {
                    value["list_count"] = b.list_ids.len().into();
                    value
                })
            })
            .collect::<std::result::Result<_, _>>()?;

        Ok(serde_json::json!({
            "count": boards.len(),
            "boards": boards,
        }))
    }
}

impl Execute<BoardStore, BoardError> for ListBoards {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;

    fn titles(result: &Value) -> Vec<&str> {
        result["boards"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["title"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_list_boards_sorted_by_title() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&AddBoard::new("alpha tasks")).unwrap();

        let az = ctx.dispatch(&ListBoards::new().sorted(BoardSort::Az)).unwrap();
        assert_eq!(
            titles(&az),
            ["alpha tasks", "Marketing Campaign", "Project Alpha"]
        );

        let za = ctx.dispatch(&ListBoards::new().sorted(BoardSort::Za)).unwrap();
        assert_eq!(
            titles(&za),
            ["Project Alpha", "Marketing Campaign", "alpha tasks"]
        );
    }

    #[test]
    fn test_list_boards_query_is_case_insensitive() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&ListBoards::new().with_query("  q4 MARKETING "))
            .unwrap();
        assert_eq!(result["count"], 1);
        assert_eq!(result["boards"][0]["id"], "board-2");
    }

    #[test]
    fn test_list_boards_in_workspace() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&ListBoards::new().in_workspace("workspace-1"))
            .unwrap();
        assert_eq!(titles(&result), ["Project Alpha"]);
        assert_eq!(result["boards"][0]["list_count"], 3);
    }

    #[test]
    fn test_recent_puts_new_board_first() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&AddBoard::new("Fresh")).unwrap();

        let recent = ctx.dispatch(&ListBoards::new()).unwrap();
        assert_eq!(titles(&recent)[0], "Fresh");

        let oldest = ctx
            .dispatch(&ListBoards::new().sorted(BoardSort::Oldest))
            .unwrap();
        assert_eq!(titles(&oldest).last(), Some(&"Fresh"));
    }
}
