//! Integration tests for [`telegram_bot::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, Reply stopping the chain and being
//! passed to after, Ignore falling through, and handler errors propagating.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::private_message;
use telegram_bot::{DbotError, Handler, HandlerChain, HandlerResponse, Message};

struct CountingHandler {
    handle_count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

fn counting(response: HandlerResponse) -> (Arc<CountingHandler>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    (
        Arc::new(CountingHandler {
            handle_count: count.clone(),
            response,
        }),
        count,
    )
}

/// **Test: Handler before returns false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            Ok(false)
        }
    }

    let (handler, count) = counting(HandlerResponse::Continue);
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(handler);

    let result = chain.handle(&private_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase; later handlers are skipped and after() sees the reply.**
#[tokio::test]
async fn test_handler_reply_stops_chain_and_passes_to_after() {
    struct CaptureResponseHandler {
        seen: Arc<std::sync::Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(&self, _message: &Message, response: &HandlerResponse) -> telegram_bot::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let (replier, reply_count) = counting(HandlerResponse::Reply("AI reply.".to_string()));
    let (tail, tail_count) = counting(HandlerResponse::Continue);

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(replier)
        .add_handler(tail);

    let result = chain.handle(&private_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("AI reply.".to_string()));
    assert_eq!(reply_count.load(Ordering::SeqCst), 1);
    assert_eq!(tail_count.load(Ordering::SeqCst), 0);
    assert_eq!(
        *seen.lock().unwrap(),
        Some(HandlerResponse::Reply("AI reply.".to_string()))
    );
}

/// **Test: Ignore and Continue fall through to the next handler; the final response is Continue.**
#[tokio::test]
async fn test_ignore_falls_through() {
    let (ignoring, ignore_count) = counting(HandlerResponse::Ignore);
    let (tail, tail_count) = counting(HandlerResponse::Continue);
    let chain = HandlerChain::new().add_handler(ignoring).add_handler(tail);
    assert_eq!(chain.len(), 2);

    let result = chain.handle(&private_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(ignore_count.load(Ordering::SeqCst), 1);
    assert_eq!(tail_count.load(Ordering::SeqCst), 1);
}

/// **Test: Multiple handlers run before in order, after in reverse.**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    struct OrderHandler {
        name: String,
        order: Arc<std::sync::Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(&self, _message: &Message, _response: &HandlerResponse) -> telegram_bot::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first".to_string(),
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second".to_string(),
            order: order.clone(),
        }));

    chain.handle(&private_message("test")).await.unwrap();

    let executed = order.lock().unwrap();
    assert_eq!(
        *executed,
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

/// **Test: A handler error propagates out of the chain.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
            Err(DbotError::Bot("send failed".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));
    let err = chain.handle(&private_message("test")).await.unwrap_err();
    assert!(matches!(err, DbotError::Bot(ref detail) if detail == "send failed"));
}
