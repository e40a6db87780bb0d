//! Per-tab mailbox carrying pane events and deferred work.
//!
//! Every message a tab handles arrives through one unbounded channel whose
//! receiver lives inside the tab. Senders handed out to sessions and other
//! collaborators stop working the moment the tab is dropped, so nothing
//! reaches a tab that no longer exists.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::color::TabColor;
use crate::pane::{PaneEvent, PaneId};

/// Work queued for the coordination thread instead of running inline
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeferredTask {
    RefreshIcon,
    ApplyColor(TabColor),
    ClearColor,
}

#[derive(Debug)]
pub(crate) enum TabMessage {
    /// An event reported by the session of `pane_id`
    Pane { pane_id: PaneId, event: PaneEvent },
    Deferred(DeferredTask),
}

pub(crate) struct Mailbox {
    tx: UnboundedSender<TabMessage>,
    rx: UnboundedReceiver<TabMessage>,
}

impl Mailbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    /// A sink that tags every event with `pane_id`
    pub(crate) fn sink(&self, pane_id: PaneId) -> PaneEventSink {
        PaneEventSink {
            pane_id,
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn handle(&self) -> TabHandle {
        TabHandle {
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn post_deferred(&self, task: DeferredTask) {
        if self.tx.send(TabMessage::Deferred(task)).is_err() {
            log::trace!("Mailbox closed, dropping deferred task");
        }
    }

    /// Next queued message, without waiting
    pub(crate) fn try_recv(&mut self) -> Option<TabMessage> {
        self.rx.try_recv().ok()
    }
}

/// Handed to a session so it can report events to its tab
#[derive(Debug, Clone)]
pub struct PaneEventSink {
    pane_id: PaneId,
    tx: UnboundedSender<TabMessage>,
}

impl PaneEventSink {
    /// The pane this sink reports for
    pub fn pane_id(&self) -> PaneId {
        self.pane_id
    }

    /// Queue `event` for the tab
    ///
    /// Returns false if the tab is gone; the event is dropped.
    pub fn post(&self, event: PaneEvent) -> bool {
        let sent = self
            .tx
            .send(TabMessage::Pane {
                pane_id: self.pane_id,
                event,
            })
            .is_ok();
        if !sent {
            log::trace!(
                "Tab gone, dropping {:?} from pane {}",
                event,
                self.pane_id
            );
        }
        sent
    }

    /// Whether the owning tab still exists
    pub fn is_alive(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Handle for collaborators that outlive a single call, such as a color
/// picker. Posting through it after the tab is gone does nothing.
#[derive(Debug, Clone)]
pub struct TabHandle {
    tx: UnboundedSender<TabMessage>,
}

impl TabHandle {
    /// Whether the tab still exists
    pub fn is_alive(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Queue a color change; returns false if the tab is gone
    pub fn set_color(&self, color: TabColor) -> bool {
        self.post(DeferredTask::ApplyColor(color))
    }

    /// Queue removal of the custom color; returns false if the tab is gone
    pub fn clear_color(&self) -> bool {
        self.post(DeferredTask::ClearColor)
    }

    fn post(&self, task: DeferredTask) -> bool {
        match self.tx.send(TabMessage::Deferred(task)) {
            Ok(()) => true,
            Err(err) => {
                log::trace!("Tab gone, dropping {:?}", err.0);
                false
            }
        }
    }
}
