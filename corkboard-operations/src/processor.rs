//! Operation processor trait

use crate::Execute;
use serde_json::Value;

/// Runs operations against a context and handles the bookkeeping around them
/// (activity logging, change notification).
pub trait OperationProcessor<C, E> {
    /// Execute `op` against `ctx`, returning the operation's value
    fn process<O>(&self, op: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}
