use std::collections::HashMap;

use chrono::{DateTime, Local, Timelike, Utc};

use crate::{
    error::FlowError,
    models::{ChatMessage, ChatPreview},
};

/// Transcript every room starts from, oldest-first.
const SEED_TRANSCRIPT: [(&str, bool, &str); 2] = [
    ("안녕하세요! 레슨 관련해서 문의드립니다.", true, "오후 2:30"),
    ("네 안녕하세요! 어떤 부분이 궁금하신가요?", false, "오후 2:32"),
];

/// In-memory transcripts keyed by counterpart display name. Messages are
/// append-only and oldest-first; ids come from one monotonic counter.
#[derive(Debug, Default)]
pub struct ChatState {
    transcripts: HashMap<String, Vec<ChatMessage>>,
    next_id: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the room transcript on first entry; later entries keep the
    /// conversation as-is.
    pub fn ensure_room(&mut self, target: &str) {
        if self.transcripts.contains_key(target) {
            return;
        }

        let mut seeded = Vec::with_capacity(SEED_TRANSCRIPT.len());
        for (text, is_me, time) in SEED_TRANSCRIPT {
            self.next_id += 1;
            seeded.push(ChatMessage {
                id: self.next_id,
                text: text.into(),
                is_me,
                time: time.into(),
                sent_at: Utc::now(),
            });
        }
        self.transcripts.insert(target.to_string(), seeded);
    }

    pub fn transcript(&self, target: &str) -> Vec<ChatMessage> {
        self.transcripts.get(target).cloned().unwrap_or_default()
    }

    /// Appends a message from the local user. Blank input is rejected here,
    /// not just by the disabled send button.
    pub fn append_local(
        &mut self,
        target: &str,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<ChatMessage, FlowError> {
        if text.trim().is_empty() {
            return Err(FlowError::EmptyMessage);
        }
        Ok(self.append(target, text, true, now))
    }

    /// Appends the scripted counterpart reply.
    pub fn append_reply(&mut self, target: &str, text: &str, now: DateTime<Utc>) -> ChatMessage {
        self.append(target, text, false, now)
    }

    fn append(&mut self, target: &str, text: &str, is_me: bool, now: DateTime<Utc>) -> ChatMessage {
        self.ensure_room(target);
        self.next_id += 1;
        let message = ChatMessage {
            id: self.next_id,
            text: text.into(),
            is_me,
            time: display_time(now),
            sent_at: now,
        };
        self.transcripts
            .get_mut(target)
            .expect("room seeded above")
            .push(message.clone());
        message
    }
}

/// Bubble timestamp in the app's locale style, e.g. "오후 2:30".
fn display_time(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&Local);
    let (is_pm, hour) = local.hour12();
    format!(
        "{} {}:{:02}",
        if is_pm { "오후" } else { "오전" },
        hour,
        local.minute()
    )
}

/// Hardcoded inbox rows for the chat list screen.
pub fn previews() -> Vec<ChatPreview> {
    vec![
        ChatPreview {
            id: 1,
            name: "김프로 강사".into(),
            image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix".into(),
            last_message: "네, 금요일 10시 예약 확정해드렸습니다! 스키장에서 뵙겠습니다.".into(),
            time: "방금 전".into(),
            unread_count: 2,
        },
        ChatPreview {
            id: 2,
            name: "이수정 코치".into(),
            image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Annie".into(),
            last_message: "혹시 장비 렌탈도 필요하신가요?".into(),
            time: "30분 전".into(),
            unread_count: 0,
        },
        ChatPreview {
            id: 3,
            name: "박성훈 매니저".into(),
            image: "https://api.dicebear.com/7.x/avataaars/svg?seed=Bob".into(),
            last_message: "안녕하세요 ProFit 고객센터입니다. 문의주신 내용 확인했습니다.".into(),
            time: "어제".into(),
            unread_count: 0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_seed_once_and_keep_order() {
        let mut chat = ChatState::new();
        chat.ensure_room("김프로 강사");
        chat.ensure_room("김프로 강사");

        let transcript = chat.transcript("김프로 강사");
        assert_eq!(transcript.len(), 2);
        assert!(transcript[0].is_me);
        assert!(!transcript[1].is_me);
        assert!(transcript[0].id < transcript[1].id);
    }

    #[test]
    fn local_messages_append_oldest_first() {
        let mut chat = ChatState::new();
        let sent = chat
            .append_local("김프로 강사", "주말에도 가능한가요?", Utc::now())
            .unwrap();

        let transcript = chat.transcript("김프로 강사");
        assert_eq!(transcript.last().unwrap(), &sent);
        assert!(sent.is_me);
    }

    #[test]
    fn blank_messages_are_rejected() {
        let mut chat = ChatState::new();
        assert_eq!(
            chat.append_local("김프로 강사", "   ", Utc::now()),
            Err(FlowError::EmptyMessage)
        );
    }

    #[test]
    fn rooms_are_independent() {
        let mut chat = ChatState::new();
        chat.append_local("김프로 강사", "문의드립니다", Utc::now())
            .unwrap();

        assert_eq!(chat.transcript("이수정 코치").len(), 0);
        chat.ensure_room("이수정 코치");
        assert_eq!(chat.transcript("이수정 코치").len(), 2);
        assert_eq!(chat.transcript("김프로 강사").len(), 3);
    }
}
