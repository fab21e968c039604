//! Core entity types for the store

mod board;
mod card;
mod id_set;
mod ids;
mod user;

pub use board::{Board, List, Workspace};
pub use card::{Card, Comment};
pub use id_set::IdSet;
pub use ids::{BoardId, CardId, CommentId, ListId, UserId, WorkspaceId};
pub use user::User;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six entity kinds the store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Workspace,
    Board,
    List,
    Card,
    Comment,
}

impl EntityKind {
    /// Lowercase noun used in op strings and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Workspace => "workspace",
            Self::Board => "board",
            Self::List => "list",
            Self::Card => "card",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed entity of any kind, returned by the generic lookup
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum EntityRef<'a> {
    User(&'a User),
    Workspace(&'a Workspace),
    Board(&'a Board),
    List(&'a List),
    Card(&'a Card),
    Comment(&'a Comment),
}

impl EntityRef<'_> {
    /// Which kind of entity this is
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::User(_) => EntityKind::User,
            Self::Workspace(_) => EntityKind::Workspace,
            Self::Board(_) => EntityKind::Board,
            Self::List(_) => EntityKind::List,
            Self::Card(_) => EntityKind::Card,
            Self::Comment(_) => EntityKind::Comment,
        }
    }

    /// The entity's id as a string
    pub fn id(&self) -> &str {
        match self {
            Self::User(u) => u.id.as_str(),
            Self::Workspace(w) => w.id.as_str(),
            Self::Board(b) => b.id.as_str(),
            Self::List(l) => l.id.as_str(),
            Self::Card(c) => c.id.as_str(),
            Self::Comment(c) => c.id.as_str(),
        }
    }
}
