use std::sync::Arc;

use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::error::FlowError;

use super::{NavigationState, Tab, ViewSnapshot};

/// Owns the navigation state and pushes a fresh `ViewSnapshot` to the
/// webview after every transition.
#[derive(Clone)]
pub struct NavigationController {
    state: Arc<Mutex<NavigationState>>,
    app_handle: AppHandle,
}

impl NavigationController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            state: Arc::new(Mutex::new(NavigationState::new())),
            app_handle,
        }
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn select_tab(&self, tab: Tab) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.select_tab(tab);
        self.emit_view(&state)
    }

    pub async fn open_instructor_profile(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.open_instructor_profile();
        self.emit_view(&state)
    }

    pub async fn open_instructor_dashboard(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.open_instructor_dashboard();
        self.emit_view(&state)
    }

    pub async fn open_chat_list(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.open_chat_list();
        self.emit_view(&state)
    }

    pub async fn open_chat_room(&self, target: &str) -> Result<ViewSnapshot, FlowError> {
        let mut state = self.state.lock().await;
        state.open_chat_room(target)?;
        Ok(self.emit_view(&state))
    }

    pub async fn go_back(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.go_back();
        self.emit_view(&state)
    }

    pub async fn finish_booking_flow(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.finish_booking_flow();
        self.emit_view(&state)
    }

    pub async fn reset(&self) -> ViewSnapshot {
        let mut state = self.state.lock().await;
        state.reset();
        self.emit_view(&state)
    }

    fn emit_view(&self, state: &NavigationState) -> ViewSnapshot {
        let snapshot = state.snapshot();
        let _ = self.app_handle.emit("navigation-changed", snapshot.clone());
        snapshot
    }
}
