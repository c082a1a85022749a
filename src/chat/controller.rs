use std::{sync::Arc, time::Duration};

use chrono::Utc;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::{sync::Mutex, time};

use crate::{error::FlowError, models::ChatMessage};

use super::store::ChatState;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

// Import the logging macros (exported at crate root)
use crate::log_info;

/// Scripted counterpart reply, sent exactly once per local message.
const AUTO_REPLY_TEXT: &str = "문의주셔서 감사합니다. 잠시 후 자세히 답변 드리겠습니다!";

const AUTO_REPLY_DELAY: Duration = Duration::from_millis(1000);
const AUTO_REPLY_DELAY_DEBUG: Duration = Duration::from_millis(50);

#[derive(Serialize, Clone)]
struct ChatMessageEvent {
    target: String,
    message: ChatMessage,
}

/// Owns the chat transcripts and schedules the mock auto-reply.
#[derive(Clone)]
pub struct ChatController {
    state: Arc<Mutex<ChatState>>,
    app_handle: AppHandle,
    reply_delay: Duration,
}

impl ChatController {
    pub fn new(app_handle: AppHandle) -> Self {
        let debug_mode = std::env::var("PROFIT_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            state: Arc::new(Mutex::new(ChatState::new())),
            app_handle,
            reply_delay: if debug_mode {
                AUTO_REPLY_DELAY_DEBUG
            } else {
                AUTO_REPLY_DELAY
            },
        }
    }

    pub async fn ensure_room(&self, target: &str) -> Vec<ChatMessage> {
        let mut state = self.state.lock().await;
        state.ensure_room(target);
        state.transcript(target)
    }

    pub async fn transcript(&self, target: &str) -> Vec<ChatMessage> {
        self.state.lock().await.transcript(target)
    }

    /// Appends the local message, then schedules exactly one auto-reply.
    /// The reply timer has no cancellation; it always fires.
    pub async fn send(&self, target: &str, text: &str) -> Result<ChatMessage, FlowError> {
        let message = {
            let mut state = self.state.lock().await;
            state.append_local(target, text, Utc::now())?
        };

        self.emit_message(target, &message);
        self.schedule_reply(target.to_string());
        Ok(message)
    }

    fn schedule_reply(&self, target: String) {
        let state = self.state.clone();
        let app_handle = self.app_handle.clone();
        let delay = self.reply_delay;

        tokio::spawn(async move {
            let reply = deliver_reply(state, &target, delay).await;
            log_info!("Auto-reply delivered to room '{}'", target);
            let _ = app_handle.emit(
                "chat-message",
                ChatMessageEvent {
                    target,
                    message: reply,
                },
            );
        });
    }

    fn emit_message(&self, target: &str, message: &ChatMessage) {
        let _ = self.app_handle.emit(
            "chat-message",
            ChatMessageEvent {
                target: target.to_string(),
                message: message.clone(),
            },
        );
    }
}

/// Waits out the reply delay, then appends the scripted reply to the room.
async fn deliver_reply(state: Arc<Mutex<ChatState>>, target: &str, delay: Duration) -> ChatMessage {
    time::sleep(delay).await;
    let mut guard = state.lock().await;
    guard.append_reply(target, AUTO_REPLY_TEXT, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn one_send_gets_exactly_one_scripted_reply() {
        let state = Arc::new(Mutex::new(ChatState::new()));
        {
            let mut guard = state.lock().await;
            guard.ensure_room("김프로 강사");
            guard
                .append_local("김프로 강사", "문의드립니다", Utc::now())
                .unwrap();
        }

        let reply = deliver_reply(state.clone(), "김프로 강사", Duration::from_millis(10)).await;
        assert!(!reply.is_me);
        assert_eq!(reply.text, AUTO_REPLY_TEXT);

        let transcript = state.lock().await.transcript("김프로 강사");
        assert_eq!(transcript.len(), 4); // two seeded + local + reply
        assert_eq!(transcript.last(), Some(&reply));
    }
}
