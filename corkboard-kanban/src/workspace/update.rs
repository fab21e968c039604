//! UpdateWorkspace command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::WorkspaceId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Patch a workspace's name and/or description
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateWorkspace {
    pub id: WorkspaceId,
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
}

operation!(
    UpdateWorkspace,
    verb = "update",
    noun = "workspace",
    description = "Update a workspace's name or description"
);

impl UpdateWorkspace {
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        if ctx.workspace(&self.id).is_none() {
            return Err(BoardError::WorkspaceNotFound {
                id: self.id.to_string(),
            });
        }
        // validate every field before touching the workspace
        let name = self
            .name
            .as_deref()
            .map(|n| ctx.normalize_title("name", n))
            .transpose()?;

        let workspace = ctx
            .workspace_mut(&self.id)
            .ok_or_else(|| BoardError::WorkspaceNotFound {
                id: self.id.to_string(),
            })?;
        if let Some(name) = name {
            workspace.name = name;
        }
        if let Some(description) = &self.description {
            workspace.description = description.clone();
        }
        Ok(serde_json::to_value(&*workspace)?)
    }
}

impl Execute<BoardStore, BoardError> for UpdateWorkspace {
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
    fn test_update_workspace_name_only() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx
            .dispatch(&UpdateWorkspace::new("workspace-1").with_name("Platform"))
            .unwrap();
        assert_eq!(result["name"], "Platform");
        assert_eq!(result["description"], "Product development");
    }

    #[test]
    fn test_update_rejects_overlong_name_without_partial_apply() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(
            &UpdateWorkspace::new("workspace-1")
                .with_name("n".repeat(1000))
                .with_description("changed"),
        );
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
        let ws = ctx.workspace(&WorkspaceId::from("workspace-1")).unwrap();
        assert_eq!(ws.description, "Product development");
    }

    #[test]
    fn test_update_missing_workspace() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&UpdateWorkspace::new("nope").with_name("x"));
        assert!(matches!(result, Err(BoardError::WorkspaceNotFound { .. })));
    }
}
