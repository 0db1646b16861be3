//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for messages without a sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            is_bot: false,
            username: None,
            first_name: String::new(),
            last_name: None,
        }
    }

    /// Name shown in mentions: first name, or `@username`, or the numeric id.
    pub fn display_name(&self) -> String {
        if !self.first_name.is_empty() {
            return self.first_name.clone();
        }
        match &self.username {
            Some(username) => format!("@{}", username),
            None => self.id.to_string(),
        }
    }
}
