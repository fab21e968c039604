//! In-memory normalized entity store for Kanban boards
//!
//! This crate holds users, workspaces, boards, lists, cards and comments in
//! flat collections keyed by id, and keeps the relationships between them
//! consistent. Parents own ordered child-id sequences; a child's position is
//! its index in its parent's sequence.
//!
//! ## Overview
//!
//! - **One store per application** - `BoardStore` is constructed explicitly and
//!   passed by reference. Tests build as many isolated stores as they like.
//! - **Commands mutate** - Every change goes through a command struct
//!   (`card::MoveCard`, `board::DeleteBoard`, ...) dispatched on the store.
//!   Commands validate before they touch anything, so a rejected command
//!   leaves the store exactly as it was.
//! - **Cascades** - Deleting a container deletes everything beneath it.
//! - **Observers** - Subscribers are called synchronously, in registration
//!   order, after every change.
//!
//! ## Basic Usage
//!
//! ```rust
//! use corkboard_kanban::{board::AddBoard, card::AddCard, list::AddList, BoardStore};
//!
//! # fn example() -> corkboard_kanban::Result<()> {
//! let mut store = BoardStore::with_demo_data();
//!
//! let board = store.dispatch(&AddBoard::new("Launch").in_workspace("workspace-1"))?;
//! let list = store.dispatch(&AddList::new(board["id"].as_str().unwrap_or_default(), "Todo"))?;
//! let card = store.dispatch(
//!     &AddCard::new(list["id"].as_str().unwrap_or_default(), "Write release notes")
//!         .with_description("Draft for review"),
//! )?;
//!
//! assert_eq!(card["position"], 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Command results are JSON values describing the affected entity. Reads
//! (`board::GetBoard`, `board::ListBoards`, ...) never reach the activity log
//! or observers.

mod cascade;
pub mod config;
mod error;
mod events;
mod integrity;
pub mod logging;
pub mod ordering;
mod processor;
mod seed;
mod store;
pub mod types;

// Command modules
pub mod board;
pub mod card;
pub mod comment;
pub mod list;
pub mod user;
pub mod workspace;

// Re-export Execute trait and types from operations crate
pub use corkboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use cascade::CascadeReport;
pub use config::StoreConfig;
pub use error::{BoardError, Result};
pub use events::{Observer, StoreEvent, SubscriptionId};
pub use integrity::IntegrityViolation;
pub use logging::Pretty;
pub use processor::BoardOperationProcessor;
pub use store::{BoardStore, StoreSnapshot};

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, Comment, CommentId, EntityKind, EntityRef, IdSet, List, ListId,
    User, UserId, Workspace, WorkspaceId,
};
