use serde::{Deserialize, Serialize};

use crate::error::FlowError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    Home,
    Search,
    History,
    Profile,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Home
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum OverlayPage {
    InstructorProfile,
    InstructorDashboard,
    ChatList,
    ChatRoom,
}

/// Which screen the frontend should render right now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Home,
    Search,
    History,
    Profile,
    InstructorProfile,
    InstructorDashboard,
    ChatList,
    ChatRoom,
}

/// Derived per-render view description. Never stored; recomputed from
/// `NavigationState` after every transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub screen: Screen,
    pub tab: Tab,
    pub chat_target: Option<String>,
    pub show_header: bool,
    pub show_bottom_nav: bool,
}

/// Tab selection plus an explicit stack of overlay pages.
///
/// The stack generalizes the one hardcoded two-level case (chat room over
/// chat list): `go_back` pops unconditionally, and whoever pushes an
/// overlay decides what sits beneath it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub tab: Tab,
    pub overlay_stack: Vec<OverlayPage>,
    pub chat_target: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_overlay(&self) -> Option<OverlayPage> {
        self.overlay_stack.last().copied()
    }

    /// Tabs and overlays are independent axes; switching tabs never touches
    /// the overlay stack.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn open_instructor_profile(&mut self) {
        self.replace_overlay(OverlayPage::InstructorProfile);
    }

    pub fn open_instructor_dashboard(&mut self) {
        self.replace_overlay(OverlayPage::InstructorDashboard);
    }

    pub fn open_chat_list(&mut self) {
        self.replace_overlay(OverlayPage::ChatList);
    }

    /// A chat room always threads the chat list beneath it, so backing out
    /// of a room lands on the list no matter where the room was opened from.
    /// The target name is fixed before the room becomes visible.
    pub fn open_chat_room(&mut self, target: &str) -> Result<(), FlowError> {
        if target.trim().is_empty() {
            return Err(FlowError::EmptyChatTarget);
        }
        self.chat_target = Some(target.to_string());
        self.overlay_stack = vec![OverlayPage::ChatList, OverlayPage::ChatRoom];
        Ok(())
    }

    /// Pop one overlay level. On an empty stack this is a no-op: the tab
    /// content is already showing.
    pub fn go_back(&mut self) {
        self.overlay_stack.pop();
        if self.current_overlay() != Some(OverlayPage::ChatRoom) {
            self.chat_target = None;
        }
    }

    /// A completed booking dismisses the whole overlay flow and lands on
    /// the reservation history tab in one step.
    pub fn finish_booking_flow(&mut self) {
        self.overlay_stack.clear();
        self.chat_target = None;
        self.tab = Tab::History;
    }

    /// Back to the launch state. Runs on logout so no stale overlay or tab
    /// survives a session boundary.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let (screen, overlay_active) = match self.current_overlay() {
            Some(OverlayPage::InstructorProfile) => (Screen::InstructorProfile, true),
            Some(OverlayPage::InstructorDashboard) => (Screen::InstructorDashboard, true),
            Some(OverlayPage::ChatList) => (Screen::ChatList, true),
            Some(OverlayPage::ChatRoom) => (Screen::ChatRoom, true),
            None => (
                match self.tab {
                    Tab::Home => Screen::Home,
                    Tab::Search => Screen::Search,
                    Tab::History => Screen::History,
                    Tab::Profile => Screen::Profile,
                },
                false,
            ),
        };

        ViewSnapshot {
            screen,
            tab: self.tab,
            chat_target: if screen == Screen::ChatRoom {
                self.chat_target.clone()
            } else {
                None
            },
            show_header: !overlay_active && self.tab == Tab::Home,
            show_bottom_nav: !overlay_active,
        }
    }

    fn replace_overlay(&mut self, page: OverlayPage) {
        self.overlay_stack = vec![page];
        self.chat_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_no_overlay() {
        let nav = NavigationState::new();
        assert_eq!(nav.tab, Tab::Home);
        assert_eq!(nav.current_overlay(), None);

        let view = nav.snapshot();
        assert_eq!(view.screen, Screen::Home);
        assert!(view.show_header);
        assert!(view.show_bottom_nav);
    }

    #[test]
    fn tab_selection_never_touches_the_overlay() {
        let mut nav = NavigationState::new();
        nav.open_instructor_profile();

        for tab in [Tab::Search, Tab::History, Tab::Profile, Tab::Home] {
            nav.select_tab(tab);
            assert_eq!(nav.current_overlay(), Some(OverlayPage::InstructorProfile));
        }

        // Overlay still takes visual precedence over the freshly selected tab.
        assert_eq!(nav.snapshot().screen, Screen::InstructorProfile);
    }

    #[test]
    fn back_from_chat_room_lands_on_chat_list() {
        let mut nav = NavigationState::new();
        nav.open_chat_list();
        nav.open_chat_room("김프로 강사").unwrap();

        nav.go_back();
        assert_eq!(nav.current_overlay(), Some(OverlayPage::ChatList));
        assert_eq!(nav.chat_target, None);

        nav.go_back();
        assert_eq!(nav.current_overlay(), None);
    }

    #[test]
    fn back_from_chat_room_lands_on_chat_list_even_when_entered_directly() {
        // The instructor profile's chat button jumps straight into a room.
        let mut nav = NavigationState::new();
        nav.open_instructor_profile();
        nav.open_chat_room("김프로 강사").unwrap();

        nav.go_back();
        assert_eq!(nav.current_overlay(), Some(OverlayPage::ChatList));
    }

    #[test]
    fn chat_room_requires_a_target_name() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.open_chat_room("  "), Err(FlowError::EmptyChatTarget));
        assert_eq!(nav.current_overlay(), None);

        nav.open_chat_room("이수정 코치").unwrap();
        assert_eq!(nav.chat_target.as_deref(), Some("이수정 코치"));
        assert_eq!(nav.snapshot().chat_target.as_deref(), Some("이수정 코치"));
    }

    #[test]
    fn back_on_empty_stack_is_a_noop() {
        let mut nav = NavigationState::new();
        nav.select_tab(Tab::Search);
        nav.go_back();
        assert_eq!(nav.tab, Tab::Search);
        assert_eq!(nav.current_overlay(), None);
    }

    #[test]
    fn finishing_a_booking_redirects_to_history() {
        let mut nav = NavigationState::new();
        nav.open_instructor_profile();
        nav.finish_booking_flow();

        assert_eq!(nav.tab, Tab::History);
        assert_eq!(nav.current_overlay(), None);
        assert!(nav.snapshot().show_bottom_nav);
    }

    #[test]
    fn reset_returns_to_the_launch_state_from_anywhere() {
        let mut nav = NavigationState::new();
        nav.select_tab(Tab::Profile);
        nav.open_chat_list();
        nav.open_chat_room("박성훈 매니저").unwrap();

        nav.reset();
        assert_eq!(nav, NavigationState::default());
    }

    #[test]
    fn header_only_shows_on_the_home_tab() {
        let mut nav = NavigationState::new();
        nav.select_tab(Tab::History);
        let view = nav.snapshot();
        assert!(!view.show_header);
        assert!(view.show_bottom_nav);

        nav.open_instructor_dashboard();
        let view = nav.snapshot();
        assert!(!view.show_header);
        assert!(!view.show_bottom_nav);
    }
}
