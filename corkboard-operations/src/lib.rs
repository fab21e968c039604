//! # Corkboard Operations
//!
//! This crate provides the `Operation` trait for defining store operations.
//! Operations are structs where the fields ARE the parameters, and each one
//! knows its canonical `"verb noun"` name.
//!
//! ## Example
//!
//! ```ignore
//! use corkboard_operations::*;
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddCard {
//!     /// The list to add the card to
//!     pub list_id: ListId,
//!     /// The card title
//!     pub title: String,
//! }
//!
//! operation!(AddCard, verb = "add", noun = "card", description = "Create a card");
//!
//! impl Execute<BoardStore, BoardError> for AddCard {
//!     fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
//!         // implementation returns ExecutionResult::Logged or Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
