#![allow(dead_code)]

pub mod mock_bot;

use telegram_bot::{Chat, Message, User};

pub fn test_user() -> User {
    User {
        id: 123,
        username: Some("test_user".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
        is_bot: false,
    }
}

pub fn private_message(content: &str) -> Message {
    Message::new_incoming("42", test_user(), Chat::private(456), content)
}

#[allow(dead_code)]
pub fn group_message(content: &str) -> Message {
    Message::new_incoming("43", test_user(), Chat::group(-1001, "Test Group"), content)
}
