//! AddWorkspace command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::Workspace;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Create a workspace. The acting user, if any, becomes its first member.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddWorkspace {
    /// The workspace name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

operation!(
    AddWorkspace,
    verb = "add",
    noun = "workspace",
    description = "Create a new workspace"
);

impl AddWorkspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let name = ctx.normalize_title("name", &self.name)?;
        let mut workspace =
            Workspace::new(name).with_description(self.description.clone().unwrap_or_default());
        workspace.id = ctx.fresh_workspace_id();
        if let Some(user) = ctx.current_user() {
            workspace.members.insert(user.id.clone());
        }

        debug!(workspace = %workspace.id, "creating workspace");
        let value = serde_json::to_value(&workspace)?;
        ctx.insert_workspace(workspace);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddWorkspace {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        result["id"].as_str().map(String::from).into_iter().collect()
    }
}
