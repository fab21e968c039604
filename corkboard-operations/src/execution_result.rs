//! Execution result types for operations

use crate::{LogEntry, Operation};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::time::Instant;

/// Result of executing an operation
///
/// - `Logged`: the operation changed state and is recorded in the activity log
/// - `Unlogged`: a read, or a tolerated no-op that changed nothing
/// - `Failed`: the operation was rejected before touching any state
pub enum ExecutionResult<T, E> {
    /// Operation succeeded and should be logged
    Logged { value: T, log_entry: LogEntry },
    /// Operation succeeded but no logging needed
    Unlogged { value: T },
    /// Operation failed
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Wrap the outcome of a read-only operation: never logged
    pub fn read(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(value) => Self::Unlogged { value },
            Err(error) => Self::Failed {
                error,
                log_entry: None,
            },
        }
    }

    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } => Ok(value),
            Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Get the value and log entry separately
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Check if this should be logged
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }

    /// True when the operation succeeded and changed state
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }
}

impl<E: Display> ExecutionResult<Value, E> {
    /// Build a `Logged` or `Failed` result for `op` from the outcome of its body.
    ///
    /// `started` is when execution began; the elapsed time lands in the log entry.
    pub fn record<O>(op: &O, started: Instant, outcome: Result<Value, E>) -> Self
    where
        O: Operation + Serialize,
    {
        let input = serde_json::to_value(op).unwrap_or(Value::Null);
        let duration_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(value) => Self::Logged {
                log_entry: LogEntry::success(op.op_string(), input, value.clone(), duration_ms),
                value,
            },
            Err(error) => {
                let message = error.to_string();
                Self::Failed {
                    error,
                    log_entry: Some(LogEntry::failure(
                        op.op_string(),
                        input,
                        &message,
                        duration_ms,
                    )),
                }
            }
        }
    }
}
