//! Shared integration test helpers for tabpane.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{MockSession, TestTab};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tabpane::{
    Config, PaneBounds, PaneEvent, PaneEventSink, ProfileId, Session, Size, Tab, TabColor,
    TabEvent, TabHeader, ThemeSlot,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Everything a `MockSession` has been asked to do
#[derive(Debug, Default)]
pub struct SessionState {
    pub title: String,
    pub scroll_offset: i32,
    pub focus_requests: usize,
    pub resizes: Vec<PaneBounds>,
    pub sink: Option<PaneEventSink>,
    pub detached: bool,
    pub shutdowns: usize,
    pub settings: Vec<TestSettings>,
}

/// Settings payload the mock sessions understand
#[derive(Debug, Clone, PartialEq)]
pub struct TestSettings {
    pub font_size: f32,
}

pub type SharedSession = Rc<RefCell<SessionState>>;

pub struct MockSession {
    state: SharedSession,
}

impl MockSession {
    /// A boxed session plus a handle to inspect it after the tab takes ownership
    pub fn create(title: &str) -> (Box<dyn Session>, SharedSession) {
        let state = Rc::new(RefCell::new(SessionState {
            title: title.to_string(),
            ..SessionState::default()
        }));
        (
            Box::new(MockSession {
                state: Rc::clone(&state),
            }),
            state,
        )
    }
}

impl Session for MockSession {
    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn scroll_offset(&self) -> i32 {
        self.state.borrow().scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        self.state.borrow_mut().scroll_offset = offset;
    }

    fn request_focus(&mut self) {
        self.state.borrow_mut().focus_requests += 1;
    }

    fn resize(&mut self, bounds: PaneBounds) {
        self.state.borrow_mut().resizes.push(bounds);
    }

    fn attach(&mut self, sink: PaneEventSink) {
        let mut state = self.state.borrow_mut();
        state.sink = Some(sink);
        state.detached = false;
    }

    fn detach(&mut self) {
        self.state.borrow_mut().detached = true;
    }

    fn update_settings(&mut self, settings: &dyn Any) {
        if let Some(settings) = settings.downcast_ref::<TestSettings>() {
            self.state.borrow_mut().settings.push(settings.clone());
        }
    }

    fn shutdown(&mut self) {
        self.state.borrow_mut().shutdowns += 1;
    }
}

/// Post `event` through the sink the session was given
pub fn post(session: &SharedSession, event: PaneEvent) -> bool {
    let sink = session
        .borrow()
        .sink
        .clone()
        .expect("session was never attached");
    sink.post(event)
}

/// Change the session title and report it
pub fn retitle(session: &SharedSession, title: &str) {
    session.borrow_mut().title = title.to_string();
    post(session, PaneEvent::TitleChanged);
}

/// Everything a `MockHeader` has been shown
#[derive(Debug, Default)]
pub struct HeaderState {
    pub title: String,
    pub titles_pushed: usize,
    pub icon: Option<String>,
    pub icons_pushed: usize,
    pub resources: HashMap<ThemeSlot, TabColor>,
    pub visual_refreshes: Vec<bool>,
    pub rename_seed: Option<String>,
    pub renaming: bool,
}

pub type SharedHeader = Rc<RefCell<HeaderState>>;

pub struct MockHeader {
    state: SharedHeader,
}

impl MockHeader {
    pub fn create() -> (Box<dyn TabHeader>, SharedHeader) {
        let state = Rc::new(RefCell::new(HeaderState::default()));
        (
            Box::new(MockHeader {
                state: Rc::clone(&state),
            }),
            state,
        )
    }
}

impl TabHeader for MockHeader {
    fn set_title(&mut self, title: &str) {
        let mut state = self.state.borrow_mut();
        state.title = title.to_string();
        state.titles_pushed += 1;
    }

    fn set_icon(&mut self, path: &str) {
        let mut state = self.state.borrow_mut();
        state.icon = Some(path.to_string());
        state.icons_pushed += 1;
    }

    fn insert_resource(&mut self, slot: ThemeSlot, color: TabColor) {
        self.state.borrow_mut().resources.insert(slot, color);
    }

    fn remove_resource(&mut self, slot: ThemeSlot) {
        self.state.borrow_mut().resources.remove(&slot);
    }

    fn has_resource(&self, slot: ThemeSlot) -> bool {
        self.state.borrow().resources.contains_key(&slot)
    }

    fn refresh_visual_state(&mut self, focused: bool) {
        self.state.borrow_mut().visual_refreshes.push(focused);
    }

    fn begin_rename(&mut self, seed: &str) {
        let mut state = self.state.borrow_mut();
        state.rename_seed = Some(seed.to_string());
        state.renaming = true;
    }

    fn end_rename(&mut self) {
        self.state.borrow_mut().renaming = false;
    }
}

/// A tab wired to mocks, laid out at 1600 x 800
pub struct TestTab {
    pub tab: Tab,
    pub header: SharedHeader,
    pub events: UnboundedReceiver<TabEvent>,
    /// Sessions in creation order; index 0 is the initial pane
    pub sessions: Vec<SharedSession>,
}

pub const CONTENT: Size = Size {
    width: 1600.0,
    height: 800.0,
};

impl TestTab {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let (session, state) = MockSession::create("shell-1");
        let (header, header_state) = MockHeader::create();
        let mut tab = Tab::new(1, config, ProfileId::nil(), session, header);
        let events = tab.subscribe();
        tab.resize_content(CONTENT);
        Self {
            tab,
            header: header_state,
            events,
            sessions: vec![state],
        }
    }

    /// Split the active pane with a fresh mock session
    pub fn split(&mut self, direction: tabpane::SplitDirection) -> (u64, u64) {
        self.split_with_profile(direction, ProfileId::nil())
    }

    /// Split the active pane with a session created from `profile`
    pub fn split_with_profile(
        &mut self,
        direction: tabpane::SplitDirection,
        profile: ProfileId,
    ) -> (u64, u64) {
        let title = format!("shell-{}", self.sessions.len() + 1);
        let (session, state) = MockSession::create(&title);
        let ids = self
            .tab
            .split_pane(direction, profile, session)
            .expect("split failed");
        self.sessions.push(state);
        ids
    }

    /// Session of the `n`th pane created (0 = initial)
    pub fn session(&self, n: usize) -> &SharedSession {
        &self.sessions[n]
    }

    /// Take every event emitted so far
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }

    /// Report `SessionReady` for every session and process it
    pub fn ready_all(&mut self) {
        for session in &self.sessions {
            post(session, PaneEvent::SessionReady);
        }
        self.tab.process_pending();
    }
}
