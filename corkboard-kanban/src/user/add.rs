//! AddUser command

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{User, UserId};
use corkboard_operations::{operation, Execute, ExecutionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

/// Add a user who can then be a member, assignee or comment author
#[derive(Debug, Deserialize, Serialize)]
pub struct AddUser {
    /// Explicit id; a fresh one is generated when absent
    pub id: Option<UserId>,
    /// Display name
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Avatar image reference
    pub avatar: Option<String>,
}

operation!(AddUser, verb = "add", noun = "user", description = "Add a user");

impl AddUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Use a specific id instead of generating one
    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    fn apply(&self, ctx: &mut BoardStore) -> Result<Value> {
        let id = match &self.id {
            Some(id) if ctx.user(id).is_some() => {
                return Err(BoardError::duplicate_id("user", id.as_str()));
            }
            Some(id) => id.clone(),
            None => ctx.fresh_user_id(),
        };

        let name = ctx.normalize_title("name", &self.name)?;
        let mut user = User::new(name, self.email.trim()).with_id(id);
        user.avatar = self.avatar.clone();

        let value = serde_json::to_value(&user)?;
        ctx.insert_user(user);
        Ok(value)
    }
}

impl Execute<BoardStore, BoardError> for AddUser {
    fn execute(&self, ctx: &mut BoardStore) -> ExecutionResult<Value, BoardError> {
        let started = Instant::now();
        ExecutionResult::record(self, started, self.apply(ctx))
    }

    fn affected_resource_ids(&self, result: &Value) -> Vec<String> {
        result["id"].as_str().map(String::from).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_user() {
        let mut ctx = BoardStore::empty();
        let result = ctx
            .dispatch(&AddUser::new("Ada", "ada@example.com"))
            .unwrap();

        let id = UserId::from(result["id"].as_str().unwrap());
        assert_eq!(ctx.user(&id).unwrap().name, "Ada");
        assert_eq!(result["email"], "ada@example.com");
    }

    #[test]
    fn test_add_user_duplicate_id() {
        let mut ctx = BoardStore::with_demo_data();
        let result = ctx.dispatch(&AddUser::new("Clone", "").with_id("user-1"));
        assert!(matches!(result, Err(BoardError::DuplicateId { .. })));
        assert_eq!(ctx.user(&UserId::from("user-1")).unwrap().name, "John Doe");
    }
}
