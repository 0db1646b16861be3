//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Kind of chat the message came from. Group handlers only act in supergroups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Chat identity with optional title (groups and channels have one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
    pub title: Option<String>,
}

impl Chat {
    pub fn is_supergroup(&self) -> bool {
        self.kind == ChatKind::Supergroup
    }
}
