//! Chat Service
//!
//! Direct messages between users. The API has no push channel, so the chat
//! page keeps its list fresh with a [`ChatPoller`] running on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::application::dto::MessageForm;
use crate::domain::{ChatApi, ChatMessage, OutgoingMessage};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Messages the caller sent or received.
    async fn messages(&self) -> Result<Vec<ChatMessage>, AppError>;

    /// Validate and send a message.
    async fn send(&self, form: &MessageForm) -> Result<ChatMessage, AppError>;
}

/// ChatService implementation
pub struct ChatServiceImpl<C: ChatApi> {
    api: Arc<C>,
}

impl<C: ChatApi> ChatServiceImpl<C> {
    pub fn new(api: Arc<C>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<C: ChatApi + 'static> ChatService for ChatServiceImpl<C> {
    async fn messages(&self) -> Result<Vec<ChatMessage>, AppError> {
        self.api.messages().await
    }

    async fn send(&self, form: &MessageForm) -> Result<ChatMessage, AppError> {
        form.validate()
            .map_err(|e| AppError::Validation(validation_error(&e)))?;

        let message = self
            .api
            .send_message(&OutgoingMessage {
                receiver: form.receiver,
                text: form.text.trim().to_string(),
                item: form.item,
            })
            .await?;

        info!(message_id = message.id, receiver = form.receiver, "Message sent");
        Ok(message)
    }
}

/// Latest poll result published to the chat page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSnapshot {
    pub messages: Vec<ChatMessage>,
    /// Message of the last failed poll; cleared by the next success
    pub error: Option<String>,
    /// Completed polls, successful or not
    pub polls: u64,
}

/// Background poller for the chat page.
///
/// Fetches immediately, then once per interval. Stopping (or dropping) the
/// poller cancels both the timer and any request still in flight.
pub struct ChatPoller {
    cancel: CancellationToken,
    snapshot: watch::Receiver<ChatSnapshot>,
    handle: Option<JoinHandle<()>>,
}

impl ChatPoller {
    pub fn start<S>(service: Arc<S>, interval: Duration) -> Self
    where
        S: ChatService + ?Sized + 'static,
    {
        let cancel = CancellationToken::new();
        let (tx, snapshot) = watch::channel(ChatSnapshot::default());

        let handle = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                debug!(?interval, "Chat poller started");
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => break,
                        _ = ticker.tick() => {}
                    }

                    let result = tokio::select! {
                        _ = cancel.cancelled() => break,
                        result = service.messages() => result,
                    };

                    tx.send_modify(|snap| {
                        snap.polls += 1;
                        match result {
                            Ok(messages) => {
                                snap.messages = messages;
                                snap.error = None;
                            }
                            Err(e) => {
                                warn!(error = %e, "Chat poll failed");
                                snap.error = Some(e.server_message().unwrap_or_else(|| e.to_string()));
                            }
                        }
                    });
                }

                debug!("Chat poller stopped");
            })
        };

        Self {
            cancel,
            snapshot,
            handle: Some(handle),
        }
    }

    /// Follow poll results.
    pub fn subscribe(&self) -> watch::Receiver<ChatSnapshot> {
        self.snapshot.clone()
    }

    pub fn latest(&self) -> ChatSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stop and wait for the background task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Chat poller task failed");
            }
        }
    }
}

impl Drop for ChatPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockChatApi;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::assert_ok;

    fn create_test_message(id: i64, text: &str) -> ChatMessage {
        ChatMessage {
            id,
            sender: Some(7),
            sender_username: "somchai".into(),
            receiver: 9,
            receiver_username: "malee".into(),
            item: None,
            text: text.into(),
            created_at: None,
        }
    }

    /// Counts polls and can hang forever to simulate a stuck request.
    struct CountingChat {
        polls: AtomicUsize,
        hang: bool,
    }

    #[async_trait]
    impl ChatService for CountingChat {
        async fn messages(&self) -> Result<Vec<ChatMessage>, AppError> {
            let n = self.polls.fetch_add(1, Ordering::SeqCst) as i64;
            if self.hang {
                std::future::pending::<()>().await;
            }
            Ok(vec![create_test_message(n, "hello")])
        }

        async fn send(&self, _form: &MessageForm) -> Result<ChatMessage, AppError> {
            Err(AppError::InvalidInput("read only".into()))
        }
    }

    // ==========================================================================
    // send
    // ==========================================================================

    #[tokio::test]
    async fn test_send_trims_text() {
        let mut api = MockChatApi::new();
        api.expect_send_message()
            .withf(|m| m.receiver == 9 && m.text == "Is the lamp still available?")
            .returning(|m| Ok(create_test_message(1, &m.text)));
        let service = ChatServiceImpl::new(Arc::new(api));

        let form = MessageForm {
            receiver: 9,
            text: " Is the lamp still available? ".into(),
            item: None,
        };

        assert_ok!(service.send(&form).await);
    }

    #[tokio::test]
    async fn test_send_rejects_blank_text_and_missing_receiver() {
        let mut api = MockChatApi::new();
        api.expect_send_message().never();
        let service = ChatServiceImpl::new(Arc::new(api));

        let form = MessageForm {
            receiver: 0,
            text: "   ".into(),
            item: None,
        };

        let Err(AppError::Validation(fields)) = service.send(&form).await else {
            panic!("expected validation error");
        };
        assert_eq!(fields["receiver"], "Receiver ID is required");
        assert_eq!(fields["text"], "Message cannot be empty");
    }

    // ==========================================================================
    // ChatPoller
    // ==========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_poller_fetches_immediately_then_on_interval() {
        let chat = Arc::new(CountingChat {
            polls: AtomicUsize::new(0),
            hang: false,
        });
        let poller = ChatPoller::start(chat.clone(), Duration::from_secs(5));
        let mut rx = poller.subscribe();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().polls, 1);

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(chat.polls.load(Ordering::SeqCst), 3);
        assert_eq!(poller.latest().messages[0].id, 2);

        poller.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_polling() {
        let chat = Arc::new(CountingChat {
            polls: AtomicUsize::new(0),
            hang: false,
        });
        let poller = ChatPoller::start(chat.clone(), Duration::from_secs(5));
        tokio::time::sleep(Duration::from_secs(1)).await;

        poller.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;

        assert!(poller.is_stopped());
        assert_eq!(chat.polls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_in_flight_poll() {
        let chat = Arc::new(CountingChat {
            polls: AtomicUsize::new(0),
            hang: true,
        });
        let poller = ChatPoller::start(chat.clone(), Duration::from_secs(5));
        let rx = poller.subscribe();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(chat.polls.load(Ordering::SeqCst), 1);

        drop(poller);
        tokio::time::sleep(Duration::from_secs(1)).await;

        // The task exited without publishing, so the sender is gone.
        assert!(rx.has_changed().is_err());
        assert_eq!(rx.borrow().polls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_keeps_previous_messages() {
        let mut api = MockChatApi::new();
        let mut calls = 0;
        api.expect_messages().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![create_test_message(1, "hi")])
            } else {
                Err(AppError::Network("timeout".into()))
            }
        });
        let service = Arc::new(ChatServiceImpl::new(Arc::new(api)));
        let poller = ChatPoller::start(service, Duration::from_secs(5));

        tokio::time::sleep(Duration::from_secs(6)).await;
        let snapshot = poller.latest();

        assert_eq!(snapshot.polls, 2);
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.error.as_deref(), Some("Network error: timeout"));
        poller.shutdown().await;
    }
}
