//! Leaf of the pane tree hosting one terminal session.

use std::fmt;

use super::bounds::PaneBounds;
use super::common::{PaneId, ProfileId};
use crate::pane::session::Session;

/// A single leaf pane and the session it hosts
pub struct Pane {
    /// Unique identifier for this pane
    pub id: PaneId,
    /// Profile the session was created from
    pub profile: ProfileId,
    /// The hosted session
    pub(crate) session: Box<dyn Session>,
    /// Whether this is the tab's active leaf.
    ///
    /// Only the pane manager flips this flag; exactly one leaf has it set.
    pub(crate) active: bool,
    /// Last title reported by the session
    pub(crate) title: String,
    /// Current bounds of this pane (updated on layout calculation)
    pub bounds: PaneBounds,
    /// Whether the session finished its asynchronous startup
    pub(crate) ready: bool,
    /// Set once the session has been torn down
    shut_down: bool,
}

impl Pane {
    /// Create a new, inactive pane around `session`
    pub fn new(id: PaneId, profile: ProfileId, session: Box<dyn Session>) -> Self {
        let title = session.title();
        Self {
            id,
            profile,
            session,
            active: false,
            title,
            bounds: PaneBounds::default(),
            ready: false,
            shut_down: false,
        }
    }

    /// Whether this pane is the active leaf
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last known session title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the session has reported `SessionReady`
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Borrow the hosted session
    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Mutably borrow the hosted session
    pub fn session_mut(&mut self) -> &mut dyn Session {
        self.session.as_mut()
    }

    /// Re-read the session title into the cache.
    ///
    /// Returns true if the title changed.
    pub(crate) fn refresh_title(&mut self) -> bool {
        let title = self.session.title();
        if title == self.title {
            return false;
        }
        self.title = title;
        true
    }

    /// Store the final box and forward it to the session
    pub(crate) fn apply_bounds(&mut self, bounds: PaneBounds) {
        self.bounds = bounds;
        self.session.resize(bounds);
    }

    /// Tear down the session (idempotent)
    pub(crate) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        log::info!("Shutting down session of pane {}", self.id);
        self.session.shutdown();
    }
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pane")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("active", &self.active)
            .field("title", &self.title)
            .field("bounds", &self.bounds)
            .field("ready", &self.ready)
            .finish()
    }
}

impl Drop for Pane {
    fn drop(&mut self) {
        log::debug!("Dropping pane {}", self.id);
        self.shutdown();
    }
}
