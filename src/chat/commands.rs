use tauri::State;

use crate::{
    chat::store,
    models::{ChatMessage, ChatPreview},
    AppState,
};

#[tauri::command]
pub async fn get_transcript(
    state: State<'_, AppState>,
    target: String,
) -> Result<Vec<ChatMessage>, String> {
    Ok(state.chat.transcript(&target).await)
}

#[tauri::command]
pub async fn send_message(
    state: State<'_, AppState>,
    target: String,
    text: String,
) -> Result<ChatMessage, String> {
    state
        .chat
        .send(&target, &text)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn chat_previews() -> Vec<ChatPreview> {
    store::previews()
}
