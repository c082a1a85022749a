use std::sync::Arc;

use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::{
    models::{UserProfile, UserRole},
    navigation::NavigationController,
};

/// Current authenticated identity, if any. Login is a stub: it cannot fail
/// and silently overwrites an existing session.
#[derive(Debug, Default)]
pub struct SessionState {
    user: Option<UserProfile>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, role: UserRole) -> UserProfile {
        let profile = UserProfile::demo(role);
        self.user = Some(profile.clone());
        profile
    }

    /// Idempotent; clearing an already-empty session is a no-op.
    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }
}

#[derive(Serialize, Clone)]
struct SessionChangedEvent {
    user: Option<UserProfile>,
}

#[derive(Clone)]
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    nav: NavigationController,
    app_handle: AppHandle,
}

impl SessionController {
    pub fn new(app_handle: AppHandle, nav: NavigationController) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            nav,
            app_handle,
        }
    }

    pub async fn login(&self, role: UserRole) -> UserProfile {
        let profile = {
            let mut state = self.state.lock().await;
            state.login(role)
        };
        info!("Signed in as {} ({:?})", profile.name, profile.role);
        self.emit_session(Some(profile.clone()));
        profile
    }

    /// The credential form accepts any input and resolves to the student
    /// demo account.
    pub async fn login_with_credentials(&self, email: &str) -> UserProfile {
        info!("Credential login attempt for '{}'", email);
        self.login(UserRole::Student).await
    }

    /// Clears the identity AND resets navigation to its launch state, so no
    /// stale overlay or tab survives the session boundary.
    pub async fn logout(&self) {
        {
            let mut state = self.state.lock().await;
            state.logout();
        }
        self.nav.reset().await;
        self.emit_session(None);
    }

    pub async fn current(&self) -> Option<UserProfile> {
        self.state.lock().await.current().cloned()
    }

    fn emit_session(&self, user: Option<UserProfile>) {
        let _ = self
            .app_handle
            .emit("session-changed", SessionChangedEvent { user });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_overwrites_the_active_session() {
        let mut session = SessionState::new();
        session.login(UserRole::Student);
        let profile = session.login(UserRole::Instructor);

        assert_eq!(profile.role, UserRole::Instructor);
        assert_eq!(session.current(), Some(&profile));
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = SessionState::new();
        session.logout();
        assert!(session.current().is_none());

        session.login(UserRole::Student);
        session.logout();
        session.logout();
        assert!(session.current().is_none());
    }
}
