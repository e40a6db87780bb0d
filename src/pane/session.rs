//! Interface to the terminal session hosted by a leaf pane.
//!
//! The session engine itself (PTY, emulation, rendering) lives outside this
//! crate. A leaf only needs the handful of calls below, plus a way for the
//! session to report back: on attach it receives a [`PaneEventSink`] and posts
//! [`PaneEvent`]s into the owning tab's mailbox.

use std::any::Any;

use super::types::PaneBounds;
use crate::tab::PaneEventSink;

/// Notification posted by a session to its owning tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneEvent {
    /// The session's control received input focus
    FocusGained,
    /// The session's title changed; the new value is read back through `Session::title`
    TitleChanged,
    /// The session finished its asynchronous startup (one-shot)
    SessionReady,
    /// The session's font metrics changed
    FontSizeChanged {
        /// True for the first measurement after startup
        initial: bool,
    },
    /// The session's connection ended and the pane should close
    CloseRequested,
}

/// A terminal session hosted by exactly one leaf pane
pub trait Session {
    /// Current session title
    fn title(&self) -> String;

    /// Current viewport scroll offset in rows
    fn scroll_offset(&self) -> i32;

    /// Move the viewport to `offset`
    fn set_scroll_offset(&mut self, offset: i32);

    /// Give the session's control programmatic input focus
    fn request_focus(&mut self);

    /// Final box for this pane. Character-grid snapping happens on the session side.
    fn resize(&mut self, bounds: PaneBounds);

    /// Register the sink used to report events to the owning tab.
    ///
    /// Called again with a fresh sink if the pane is re-registered.
    fn attach(&mut self, sink: PaneEventSink);

    /// The pane left the tree; any held sink is now revoked
    fn detach(&mut self) {}

    /// Refreshed settings for the profile this session was created from.
    ///
    /// The payload type is agreed between the host and its sessions; the tab
    /// only routes it by profile.
    fn update_settings(&mut self, _settings: &dyn Any) {}

    /// Tear the session down
    fn shutdown(&mut self);
}
