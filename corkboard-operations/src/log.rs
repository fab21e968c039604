//! Activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One executed operation, as recorded in the activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add card", "move card")
    pub op: String,

    /// The operation's parameters as JSON
    pub input: Value,

    /// The result value, or `{"error": ...}` for failures
    pub output: Value,

    /// Who performed the operation, filled in by the processor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a log entry for a successful operation
    pub fn success(op: impl Into<String>, input: Value, output: Value, duration_ms: u64) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor: None,
            duration_ms,
        }
    }

    /// Create a log entry for a failed operation
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::success(op, input, serde_json::json!({ "error": error }), duration_ms)
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Whether this entry records a failure
    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }

    /// The error message of a failed operation
    pub fn error(&self) -> Option<&str> {
        self.output.get("error").and_then(Value::as_str)
    }

    /// Whether `id` appears as a string anywhere in the input or output
    pub fn mentions(&self, id: &str) -> bool {
        value_mentions(&self.input, id) || value_mentions(&self.output, id)
    }
}

fn value_mentions(value: &Value, id: &str) -> bool {
    match value {
        Value::String(s) => s == id,
        Value::Array(items) => items.iter().any(|v| value_mentions(v, id)),
        Value::Object(map) => map.values().any(|v| value_mentions(v, id)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_entry() {
        let entry = LogEntry::failure("move card", json!({"id": "c1"}), "card not found: c1", 0);
        assert!(entry.is_failure());
        assert_eq!(entry.error(), Some("card not found: c1"));
        assert!(entry.actor.is_none());
    }

    #[test]
    fn test_mentions_searches_nested_values() {
        let entry = LogEntry::success(
            "delete board",
            json!({"id": "b1"}),
            json!({"removed": {"lists": 2}, "ids": ["l1", "l2"]}),
            3,
        )
        .with_actor("user-1");

        assert!(entry.mentions("b1"));
        assert!(entry.mentions("l2"));
        assert!(!entry.mentions("l3"));
        // numbers are not ids
        assert!(!entry.mentions("2"));
    }
}
