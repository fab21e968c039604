//! Operation processor for the entity store
//!
//! Executes an operation, appends its log entry to the store's activity log
//! with actor attribution, and notifies observers when the store changed.

use crate::error::BoardError;
use crate::logging::Pretty;
use crate::store::BoardStore;
use corkboard_operations::{Execute, OperationProcessor};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Processes operations against a [`BoardStore`]
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    /// Actor recorded on log entries. Falls back to the store's acting user.
    actor: Option<String>,
}

impl BoardOperationProcessor {
    /// A processor that attributes every entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    fn actor_for(&self, store: &BoardStore) -> Option<String> {
        self.actor
            .clone()
            .or_else(|| store.current_user().map(|u| u.id.to_string()))
    }
}

impl OperationProcessor<BoardStore, BoardError> for BoardOperationProcessor {
    fn process<O>(&self, op: &O, store: &mut BoardStore) -> Result<Value, BoardError>
    where
        O: Execute<BoardStore, BoardError>,
    {
        // attribute to whoever was acting when the operation started
        let actor = self.actor_for(store);
        let execution = op.execute(store);
        let mutated = execution.is_mutation();
        let (result, log_entry) = execution.split();

        if let Some(entry) = log_entry {
            let entry = match actor {
                Some(actor) => entry.with_actor(actor),
                None => entry,
            };
            if entry.is_failure() {
                warn!(op = %entry.op, output = %entry.output, "operation failed");
            } else {
                debug!(op = %entry.op, duration_ms = entry.duration_ms, "operation applied");
            }
            trace!("activity entry: {}", Pretty(&entry));
            store.record_activity(entry);
        }

        if mutated {
            if let Ok(value) = &result {
                let affected = op.affected_resource_ids(value);
                store.notify(op.op_string(), affected);
            }
        }

        result
    }
}
