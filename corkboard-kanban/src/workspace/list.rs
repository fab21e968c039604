//! ListWorkspaces command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::UserId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List workspaces, optionally only those a user belongs to
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListWorkspaces {
    /// Only workspaces with this member
    pub member: Option<UserId>,
}

operation!(
    ListWorkspaces,
    verb = "list",
    noun = "workspaces",
    description = "List workspaces"
);

impl ListWorkspaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, member: impl Into<UserId>) -> Self {
        self.member = Some(member.into());
        self
    }

    fn read(&self, ctx: &BoardStore) -> Result<Value> {
        let workspaces: Vec<Value> = ctx
            .workspaces()
            .filter(|w| {
                self.member
                    .as_ref()
                    .map(|m| w.members.contains(m))
                    .unwrap_or(true)
            })
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()?;

        Ok(serde_json::json!({
            "count": workspaces.len(),
            "workspaces": workspaces,
        }))
    }
}

impl Execute<BoardStore, BoardError> for ListWorkspaces {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        ExecutionResult::read(self.read(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_all_workspaces() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&ListWorkspaces::new()).unwrap();
        assert_eq!(result["count"], 2);
        assert_eq!(result["workspaces"][0]["id"], "workspace-1");
    }

    #[test]
    fn test_list_workspaces_by_member() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&ListWorkspaces::new().with_member("user-3"))
            .unwrap();
        assert_eq!(result["count"], 1);
        assert_eq!(result["workspaces"][0]["name"], "Marketing");
    }
}
