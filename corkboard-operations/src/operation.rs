//! The `Operation` and `Execute` traits

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every operation carries: what it does, to what.
pub trait Operation {
    /// The action, e.g. "add", "move", "delete"
    fn verb(&self) -> &'static str;

    /// The entity kind acted on, e.g. "card"
    fn noun(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string used in logs, e.g. "move card"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context `C`, failing with `E`.
///
/// Execution is synchronous and runs to completion before returning, so a
/// compound mutation is never observable half-applied.
pub trait Execute<C, E>: Operation {
    /// Execute the operation
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;

    /// Ids of the resources touched by this operation, given its result.
    ///
    /// Used to tag change notifications and per-entity activity.
    fn affected_resource_ids(&self, _result: &Value) -> Vec<String> {
        Vec::new()
    }
}

/// Implement [`Operation`] for a struct.
///
/// ```ignore
/// operation!(AddCard, verb = "add", noun = "card", description = "Create a card");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}
