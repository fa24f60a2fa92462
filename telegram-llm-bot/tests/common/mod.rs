#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;

use std::sync::Arc;

use llm_client::CompletionParams;
use telegram_bot::{Chat, ConversationStore, Message, User, WhitespaceTokenizer};
use telegram_llm_bot::ChatHandler;
use tokio::sync::RwLock;

use mock_bot::MockBot;
use mock_llm::MockLlm;

pub const BOT_USERNAME: &str = "relaybot";

pub fn test_user() -> User {
    User {
        id: 456,
        username: Some("testuser".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
        is_bot: false,
    }
}

pub fn private_message(chat_id: i64, content: &str) -> Message {
    Message::new_incoming("msg1", test_user(), Chat::private(chat_id), content)
}

pub fn group_message(chat_id: i64, content: &str) -> Message {
    Message::new_incoming("msg2", test_user(), Chat::group(chat_id, "Group"), content)
}

pub struct Harness {
    pub handler: ChatHandler,
    pub bot: Arc<MockBot>,
    pub llm: Arc<MockLlm>,
    pub store: Arc<ConversationStore>,
}

/// Chat handler over mocks; budget counted in words so eviction is predictable.
pub fn harness(max_tokens: usize) -> Harness {
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(MockLlm::new());
    let store = Arc::new(ConversationStore::new(
        "You are helpful.",
        max_tokens,
        Arc::new(WhitespaceTokenizer),
    ));
    let handler = ChatHandler::new(
        Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))),
        llm.clone(),
        bot.clone(),
        store.clone(),
        CompletionParams::default(),
    );
    Harness {
        handler,
        bot,
        llm,
        store,
    }
}
