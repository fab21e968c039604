//! DeleteWorkspace command

use crate::cascade::{self, CascadeReport};
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::WorkspaceId;
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Delete a workspace with all of its boards, lists, cards and comments
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteWorkspace {
    pub id: WorkspaceId,
}

operation!(
    DeleteWorkspace,
    verb = "delete",
    noun = "workspace",
    description = "Delete a workspace and everything in it"
);

impl DeleteWorkspace {
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let mut report = CascadeReport::default();
        cascade::remove_workspace(ctx, &self.id, &mut report);
        info!(workspace = %self.id, removed = report.total(), "deleted workspace");
        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id,
            "removed": report,
        }))
    }
}

impl Execute<BoardStore, BoardError> for DeleteWorkspace {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        if ctx.workspace(&self.id).is_none() {
            debug!(workspace = %self.id, "delete workspace: already absent");
            return ExecutionResult::Unlogged {
                value: serde_json::json!({ "deleted": false, "id": self.id }),
            };
        }
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        vec![self.id.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntityKind;

    #[test]
    fn test_delete_workspace_cascades() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&DeleteWorkspace::new("workspace-1")).unwrap();

        assert_eq!(result["deleted"], true);
        assert_eq!(result["removed"]["boards"], 1);
        assert_eq!(result["removed"]["lists"], 3);
        assert_eq!(result["removed"]["cards"], 4);
        assert!(!ctx.contains(EntityKind::Board, "board-1"));
        assert!(ctx.contains(EntityKind::Board, "board-2"));
        assert!(ctx.verify_integrity().is_empty());
    }

    #[test]
    fn test_delete_workspace_twice_is_noop() {
        let mut ctx = BoardStore::with_demo_data();
        ctx.dispatch(&DeleteWorkspace::new("workspace-2")).unwrap();
        let result = ctx.dispatch(&DeleteWorkspace::new("workspace-2")).unwrap();
        assert_eq!(result["deleted"], false);
    }
}
