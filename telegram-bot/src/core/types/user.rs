//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names, bot flag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_bot: bool,
}

impl User {
    /// A human user with only an id; used when the transport omits the sender.
    pub fn anonymous() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
            is_bot: false,
        }
    }
}
