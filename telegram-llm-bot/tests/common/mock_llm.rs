#![allow(dead_code)]

//! Mock [`llm_client::LlmClient`] returning scripted completions and recording every request.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use llm_client::{Completion, CompletionParams, LlmClient};
use prompt::ChatMessage;

pub struct MockLlm {
    scripted: Mutex<VecDeque<Completion>>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues the outcome of the next call. Unscripted calls answer `Text("reply N")`.
    pub fn push(&self, completion: Completion) {
        self.scripted.lock().unwrap().push_back(completion);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Vec<ChatMessage> {
        self.requests.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, messages: Vec<ChatMessage>, _params: &CompletionParams) -> Completion {
        let n = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(messages);
            requests.len()
        };
        self.scripted
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Completion::Text(format!("reply {}", n)))
    }
}
