//! Card and Comment types

use super::id_set::IdSet;
use super::ids::{CardId, CommentId, ListId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card on a list.
///
/// `list_id` always names the one list whose `card_ids` contains this card;
/// the card's position is its index there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub list_id: ListId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub assigned_users: IdSet<UserId>,
}

impl Card {
    /// Create an unassigned card on `list_id` with a fresh id
    pub fn new(title: impl Into<String>, list_id: impl Into<ListId>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: String::new(),
            list_id: list_id.into(),
            created_at: Utc::now(),
            assigned_users: IdSet::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether `user` is assigned
    pub fn is_assigned(&self, user: &UserId) -> bool {
        self.assigned_users.contains(user)
    }
}

/// A comment on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub card_id: CardId,
    pub author: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(card_id: CardId, author: UserId, content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            card_id,
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("Write docs", "list-1").with_description("README first");
        assert_eq!(card.title, "Write docs");
        assert_eq!(card.list_id, "list-1");
        assert!(card.assigned_users.is_empty());
    }

    #[test]
    fn test_comment() {
        let comment = Comment::new(
            CardId::from_string("card-1"),
            UserId::from_string("alice"),
            "Looks good",
        );
        assert_eq!(comment.content, "Looks good");
        assert_eq!(comment.author.as_str(), "alice");
    }
}
