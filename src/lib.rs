mod bookings;
mod catalog;
mod chat;
mod error;
mod models;
mod navigation;
mod session;
mod settings;
mod utils;

use bookings::{
    commands::{book_lesson, checkin_payload, list_bookings, list_requests, resolve_request},
    BookingController,
};
use catalog::{FeaturedInstructor, InstructorDetail};
use chat::{
    commands::{chat_previews, get_transcript, send_message},
    ChatController,
};
use models::{UserProfile, UserRole};
use navigation::{
    commands::{
        get_view, go_back, open_chat_list, open_chat_room, open_instructor_dashboard,
        open_instructor_profile, select_tab,
    },
    NavigationController,
};
use session::SessionController;
use settings::{NotificationSettings, SettingsStore};
use tauri::{Emitter, Manager, State};

pub(crate) struct AppState {
    pub(crate) session: SessionController,
    pub(crate) nav: NavigationController,
    pub(crate) bookings: BookingController,
    pub(crate) chat: ChatController,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
async fn login(role: UserRole, state: State<'_, AppState>) -> Result<UserProfile, String> {
    Ok(state.session.login(role).await)
}

#[tauri::command]
async fn login_with_credentials(
    email: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<UserProfile, String> {
    // Stub auth: any credential pair maps to the student demo account.
    let _ = password;
    Ok(state.session.login_with_credentials(&email).await)
}

#[tauri::command]
async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.session.logout().await;
    Ok(())
}

#[tauri::command]
async fn current_user(state: State<'_, AppState>) -> Result<Option<UserProfile>, String> {
    Ok(state.session.current().await)
}

#[tauri::command]
fn get_instructor_detail() -> InstructorDetail {
    catalog::instructor_detail()
}

#[tauri::command]
fn get_featured_instructors() -> Vec<FeaturedInstructor> {
    catalog::featured_instructors()
}

#[tauri::command]
fn get_notification_settings(state: State<AppState>) -> Result<NotificationSettings, String> {
    Ok(state.settings.notifications())
}

#[tauri::command]
fn set_notification_settings(
    settings: NotificationSettings,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    state
        .settings
        .update_notifications(settings.clone())
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("notification-settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("ProFit starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;

                let nav = NavigationController::new(app.handle().clone());
                let session = SessionController::new(app.handle().clone(), nav.clone());
                let bookings = BookingController::new(app.handle().clone());
                let chat = ChatController::new(app.handle().clone());

                app.manage(AppState {
                    session,
                    nav,
                    bookings,
                    chat,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            login,
            login_with_credentials,
            logout,
            current_user,
            get_view,
            select_tab,
            open_instructor_profile,
            open_instructor_dashboard,
            open_chat_list,
            open_chat_room,
            go_back,
            book_lesson,
            list_bookings,
            list_requests,
            resolve_request,
            checkin_payload,
            get_transcript,
            send_message,
            chat_previews,
            get_instructor_detail,
            get_featured_instructors,
            get_notification_settings,
            set_notification_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
