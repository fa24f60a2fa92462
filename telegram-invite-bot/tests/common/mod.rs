#![allow(dead_code)]

pub mod mock_bot;

use telegram_bot::{Chat, Document, Message, User};

pub const TARGET_CHAT: i64 = -1009876543210;

pub fn admin() -> User {
    User {
        id: 7,
        username: Some("admin".to_string()),
        first_name: Some("Admin".to_string()),
        last_name: None,
        is_bot: false,
    }
}

pub fn command(content: &str) -> Message {
    Message::new_incoming("55", admin(), Chat::private(7), content)
}

/// A document message whose content is its caption, as the Telegram adapter produces it.
pub fn document(file_id: &str, caption: Option<&str>) -> Message {
    let mut msg = Message::new_incoming("56", admin(), Chat::private(7), caption.unwrap_or(""));
    msg.message_type = "document".to_string();
    msg.caption = caption.map(str::to_string);
    msg.document = Some(Document {
        file_id: file_id.to_string(),
        file_name: Some("emails.txt".to_string()),
    });
    msg
}
