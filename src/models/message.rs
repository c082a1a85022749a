use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_me: bool,
    /// Display time the bubble shows, e.g. "오후 2:30".
    pub time: String,
    pub sent_at: DateTime<Utc>,
}

/// One row of the message inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPreview {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub last_message: String,
    pub time: String,
    pub unread_count: u32,
}
