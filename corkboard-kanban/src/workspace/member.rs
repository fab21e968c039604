//! Workspace membership commands

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{UserId, WorkspaceId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Add a user to a workspace's member set
#[derive(Debug, Deserialize, Serialize)]
pub struct AddWorkspaceMember {
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
}

operation!(
    AddWorkspaceMember,
    verb = "add",
    noun = "workspace member",
    description = "Add a user to a workspace"
);

impl AddWorkspaceMember {
    pub fn new(workspace_id: impl Into<WorkspaceId>, user_id: impl Into<UserId>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            user_id: user_id.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.user(&self.user_id).is_none() {
            return Err(BoardError::UserNotFound {
                id: self.user_id.to_string(),
            });
        }
        let workspace =
            ctx.workspace_mut(&self.workspace_id)
                .ok_or_else(|| BoardError::WorkspaceNotFound {
                    id: self.workspace_id.to_string(),
                })?;
        workspace.members.insert(self.user_id.clone());
        Ok(serde_json::json!({
            "workspace_id": self.workspace_id,
            "members": workspace.members,
        }))
    }
}

impl Execute<BoardStore, BoardError> for AddWorkspaceMember {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if let Some(workspace) = ctx.workspace(&self.workspace_id) {
            if workspace.members.contains(&self.user_id) {
                return ExecutionResult::Unlogged {
                    value: serde_json::json!({
                        "workspace_id": self.workspace_id,
                        "members": workspace.members,
                    }),
                };
            }
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.workspace_id.to_string(), self.user_id.to_string()]
    }
}

/// Remove a user from a workspace's member set
#[derive(Debug, Deserialize, Serialize)]
pub struct RemoveWorkspaceMember {
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
}

operation!(
    RemoveWorkspaceMember,
    verb = "remove",
    noun = "workspace member",
    description = "Remove a user from a workspace"
);

impl RemoveWorkspaceMember {
    pub fn new(workspace_id: impl Into<WorkspaceId>, user_id: impl Into<UserId>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            user_id: user_id.into(),
        }
    }
}

impl Execute<BoardStore, BoardError> for RemoveWorkspaceMember {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        let Some(workspace) = ctx.workspace_mut(&self.workspace_id) else {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "removed": false }),
            };
        };
        if !workspace.members.remove(&self.user_id) {
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "removed": false }),
            };
        }
        let value = serde_json::json!({
            "removed": true,
            "workspace_id": self.workspace_id,
            "members": workspace.members,
        });
        ExecutionResult::record(self, started, Ok(value))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.workspace_id.to_string(), self.user_id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_member_is_idempotent() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&AddWorkspaceMember::new("workspace-1", "user-3"))
            .unwrap();
        let revision = ctx.revision();
        let result = ctx
            .dispatch(&AddWorkspaceMember::new("workspace-1", "user-3"))
            .unwrap();

        assert_eq!(result["members"], serde_json::json!(["user-1", "user-2", "user-3"]));
        assert_eq!(ctx.revision(), revision);
    }

    #[test]
    fn test_add_unknown_member_fails() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddWorkspaceMember::new("workspace-1", "ghost"));
        assert!(matches!(result, Err(BoardError::UserNotFound { .. })));
    }

    #[test]
    fn test_remove_member() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&RemoveWorkspaceMember::new("workspace-2", "user-3"))
            .unwrap();
        assert_eq!(result["removed"], true);
        assert_eq!(result["members"], serde_json::json!(["user-2"]));

        let again = ctx
            .dispatch(&RemoveWorkspaceMember::new("workspace-2", "user-3"))
            .unwrap();
        assert_eq!(again["removed"], false);
    }

    #[test]
    fn test_remove_from_missing_workspace_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&RemoveWorkspaceMember::new("workspace-404", "user-1"))
            .unwrap();

        assert_eq!(result["removed"], false);
        assert_eq!(ctx.activity().count(), 0);
    }
}
