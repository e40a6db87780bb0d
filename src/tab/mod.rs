//! Tab coordination for split terminal sessions
//!
//! This module provides the tab layer on top of the pane tree:
//! - `Tab`: Owns one pane tree and coordinates focus, title, icon and color
//! - `TabHeader`: The presentation widget a tab pushes state into
//! - `PaneEventSink` / `TabHandle`: Senders into the tab's mailbox
//! - `TabEvent`: Notifications delivered to subscribers
//!
//! A tab is driven from a single coordination thread. Sessions never call
//! into the tab directly; they post into its mailbox and the owner drains it
//! with [`Tab::process_pending`].

mod color;
mod focus;
mod header;
mod mailbox;
mod pane_ops;
mod title;

pub use color::TabColor;
pub use header::{TabHeader, ThemeSlot};
pub use mailbox::{PaneEventSink, TabHandle};
pub use title::{RenameKey, RenameState};

use std::collections::HashSet;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::pane::{Pane, PaneId, PaneManager, Session};
use mailbox::{DeferredTask, Mailbox, TabMessage};
use tabpane_config::Config;

// Re-export shared identifiers from tabpane-config
pub use tabpane_config::{ProfileId, TabId};

/// Notification delivered to tab subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    /// The last pane closed; fires once per tab
    Closed,
    /// A different leaf became active
    ActivePaneChanged(PaneId),
    /// A custom color was applied
    ColorSelected(TabColor),
    /// The custom color was removed
    ColorCleared,
}

/// A single terminal tab hosting a tree of split panes
pub struct Tab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Pane tree and active-leaf tracker
    pub(super) pane_manager: PaneManager,
    /// Presentation widget for this tab
    pub(super) header: Box<dyn TabHeader>,
    /// Inbound pane events and deferred work
    pub(super) mailbox: Mailbox,
    /// Panes whose events are still accepted
    pub(super) registered: HashSet<PaneId>,
    /// Subscribers to `TabEvent`s
    pub(super) subscribers: Vec<UnboundedSender<TabEvent>>,
    /// Title set by the user, overriding the session title
    pub(super) runtime_title: Option<String>,
    pub(super) rename_state: RenameState,
    /// Custom color, once applied
    pub(super) color: Option<TabColor>,
    /// Alpha of the deselected color variant
    pub(super) deselected_alpha: u8,
    /// Set once any session in this tab finished starting up
    pub(super) session_initialized: bool,
    /// Whether this tab is the selected tab of its window
    pub(super) focused: bool,
    /// Last icon path requested
    pub(super) icon_path: Option<String>,
    /// Set once `Closed` has fired
    pub(super) closed: bool,
}

impl Tab {
    /// Create a new tab with one pane hosting `session`
    pub fn new(
        id: TabId,
        config: &Config,
        profile: ProfileId,
        session: Box<dyn Session>,
        header: Box<dyn TabHeader>,
    ) -> Self {
        let pane_manager = PaneManager::with_initial_pane(config, profile, session);
        let mut tab = Self {
            id,
            pane_manager,
            header,
            mailbox: Mailbox::new(),
            registered: HashSet::new(),
            subscribers: Vec::new(),
            runtime_title: None,
            rename_state: RenameState::Idle,
            color: None,
            deselected_alpha: config.deselected_tab_alpha,
            session_initialized: false,
            focused: false,
            icon_path: None,
            closed: false,
        };

        for pane_id in tab.pane_manager.pane_ids() {
            tab.register_pane(pane_id);
        }
        tab.push_title();

        log::info!("Created tab {} with profile {}", id, profile);
        tab
    }

    /// Receive every `TabEvent` emitted from now on
    pub fn subscribe(&mut self) -> UnboundedReceiver<TabEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// A handle collaborators can keep to post work to this tab later
    pub fn handle(&self) -> TabHandle {
        self.mailbox.handle()
    }

    /// Whether the last pane has closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Pane tree and active-leaf tracker
    pub fn pane_manager(&self) -> &PaneManager {
        &self.pane_manager
    }

    /// Handle every queued message
    ///
    /// Returns the number of messages taken from the mailbox, including
    /// dropped ones.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(message) = self.mailbox.try_recv() {
            handled += 1;
            self.handle_message(message);
        }
        handled
    }

    fn handle_message(&mut self, message: TabMessage) {
        crate::debug_trace!("TAB_MAILBOX", "Tab {} handling {:?}", self.id, message);
        match message {
            TabMessage::Pane { pane_id, event } => {
                if !self.registered.contains(&pane_id) {
                    log::debug!(
                        "Dropping {:?} from unregistered pane {} in tab {}",
                        event,
                        pane_id,
                        self.id
                    );
                    return;
                }
                self.handle_pane_event(pane_id, event);
            }
            TabMessage::Deferred(task) => self.run_deferred(task),
        }
    }

    fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::RefreshIcon => self.refresh_icon(),
            DeferredTask::ApplyColor(color) => self.apply_color(color),
            DeferredTask::ClearColor => self.apply_clear_color(true),
        }
    }

    /// Hand a fresh sink to the session of `pane_id` and accept its events
    pub(super) fn register_pane(&mut self, pane_id: PaneId) {
        let sink = self.mailbox.sink(pane_id);
        if let Some(pane) = self.pane_manager.get_pane_mut(pane_id) {
            pane.session_mut().attach(sink);
            self.registered.insert(pane_id);
        }
    }

    /// Stop accepting events from `pane` and tear its session down
    ///
    /// `pane` must already be out of the tree.
    pub(super) fn release_pane(&mut self, pane: &mut Pane) {
        self.registered.remove(&pane.id);
        pane.session_mut().detach();
        pane.shutdown();
    }

    pub(super) fn emit(&mut self, event: TabEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Tear the tab down
    ///
    /// Removes the custom color, then shuts down every session. Subscribers
    /// are not notified.
    pub fn shutdown(mut self) {
        log::info!("Shutting down tab {}", self.id);
        self.apply_clear_color(false);

        if let Some(mut root) = self.pane_manager.take_root() {
            for pane in root.all_panes_mut() {
                self.release_pane(pane);
            }
        }
    }
}
