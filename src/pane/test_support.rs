//! Minimal session used by the pane unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::session::Session;
use super::types::{Pane, PaneBounds, PaneId, ProfileId};
use crate::tab::PaneEventSink;

#[derive(Debug, Default)]
pub(crate) struct StubState {
    pub title: String,
    pub resizes: Vec<PaneBounds>,
    pub shutdowns: usize,
}

pub(crate) struct StubSession {
    pub state: Rc<RefCell<StubState>>,
}

impl StubSession {
    pub fn new(title: &str) -> (Self, Rc<RefCell<StubState>>) {
        let state = Rc::new(RefCell::new(StubState {
            title: title.to_string(),
            ..StubState::default()
        }));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl Session for StubSession {
    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn scroll_offset(&self) -> i32 {
        0
    }

    fn set_scroll_offset(&mut self, _offset: i32) {}

    fn request_focus(&mut self) {}

    fn resize(&mut self, bounds: PaneBounds) {
        self.state.borrow_mut().resizes.push(bounds);
    }

    fn attach(&mut self, _sink: PaneEventSink) {}

    fn shutdown(&mut self) {
        self.state.borrow_mut().shutdowns += 1;
    }
}

pub(crate) fn stub_session() -> Box<dyn Session> {
    Box::new(StubSession::new("shell").0)
}

pub(crate) fn stub_pane(id: PaneId) -> Pane {
    Pane::new(id, ProfileId::nil(), stub_session())
}
