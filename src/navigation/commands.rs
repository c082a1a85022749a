use tauri::State;

use crate::{
    navigation::{Tab, ViewSnapshot},
    AppState,
};

#[tauri::command]
pub async fn get_view(state: State<'_, AppState>) -> Result<ViewSnapshot, String> {
    Ok(state.nav.snapshot().await)
}

#[tauri::command]
pub async fn select_tab(state: State<'_, AppState>, tab: Tab) -> Result<ViewSnapshot, String> {
    Ok(state.nav.select_tab(tab).await)
}

#[tauri::command]
pub async fn open_instructor_profile(state: State<'_, AppState>) -> Result<ViewSnapshot, String> {
    Ok(state.nav.open_instructor_profile().await)
}

#[tauri::command]
pub async fn open_instructor_dashboard(
    state: State<'_, AppState>,
) -> Result<ViewSnapshot, String> {
    Ok(state.nav.open_instructor_dashboard().await)
}

#[tauri::command]
pub async fn open_chat_list(state: State<'_, AppState>) -> Result<ViewSnapshot, String> {
    Ok(state.nav.open_chat_list().await)
}

/// Enters a chat room: fixes the navigation target first, then makes sure
/// the transcript for that counterpart exists.
#[tauri::command]
pub async fn open_chat_room(
    state: State<'_, AppState>,
    target: String,
) -> Result<ViewSnapshot, String> {
    let view = state
        .nav
        .open_chat_room(&target)
        .await
        .map_err(|e| e.to_string())?;
    state.chat.ensure_room(&target).await;
    Ok(view)
}

#[tauri::command]
pub async fn go_back(state: State<'_, AppState>) -> Result<ViewSnapshot, String> {
    Ok(state.nav.go_back().await)
}
