//! Active-pane tracking and focus handling for a tab.
//!
//! Focus events bubble up from sessions through the mailbox; programmatic
//! focus flows back down, but only to sessions that have finished starting.

use super::{Tab, TabEvent};
use crate::pane::{PaneEvent, PaneId};

impl Tab {
    /// React to an event posted by a registered pane
    pub(super) fn handle_pane_event(&mut self, pane_id: PaneId, event: PaneEvent) {
        match event {
            PaneEvent::FocusGained => {
                self.update_active_pane(pane_id);
            }
            PaneEvent::TitleChanged => {
                if let Some(pane) = self.pane_manager.get_pane_mut(pane_id) {
                    pane.refresh_title();
                }
                if self.pane_manager.active_pane_id() == Some(pane_id) {
                    self.push_title();
                }
            }
            PaneEvent::SessionReady => self.on_session_ready(pane_id),
            PaneEvent::FontSizeChanged { initial } => {
                if initial {
                    log::debug!("Initial font size from pane {}, relayout", pane_id);
                    self.pane_manager.recalculate_bounds();
                }
            }
            PaneEvent::CloseRequested => {
                log::info!("Pane {} in tab {} requested close", pane_id, self.id);
                if let Err(err) = self.close_pane(pane_id) {
                    log::debug!("Close request from pane {} ignored: {}", pane_id, err);
                }
            }
        }
    }

    fn on_session_ready(&mut self, pane_id: PaneId) {
        let Some(pane) = self.pane_manager.get_pane_mut(pane_id) else {
            return;
        };
        if pane.ready {
            log::debug!("Duplicate SessionReady from pane {}", pane_id);
            return;
        }
        pane.ready = true;
        self.session_initialized = true;
        crate::debug_info!("TAB_FOCUS", "Pane {} in tab {} is ready", pane_id, self.id);

        if self.focused {
            self.focus_active_pane();
        }
    }

    /// Make `pane_id` the active leaf
    ///
    /// Refreshes the title and notifies subscribers. Returns false (and
    /// notifies nobody) if the pane is already active or unknown.
    pub fn update_active_pane(&mut self, pane_id: PaneId) -> bool {
        if !self.pane_manager.set_active(pane_id) {
            return false;
        }
        self.on_active_changed(pane_id);
        true
    }

    pub(super) fn on_active_changed(&mut self, pane_id: PaneId) {
        crate::debug_info!(
            "TAB_FOCUS",
            "Tab {} active pane is now {}",
            self.id,
            pane_id
        );
        self.push_title();
        self.emit(TabEvent::ActivePaneChanged(pane_id));
    }

    /// Give input focus to the active leaf, if its session is ready
    pub(super) fn focus_active_pane(&mut self) {
        if !self.session_initialized {
            log::debug!("Tab {} not initialized, focus deferred", self.id);
            return;
        }
        if let Some(pane) = self.pane_manager.active_pane_mut() {
            if pane.is_ready() {
                pane.session_mut().request_focus();
            } else {
                log::debug!("Pane {} not ready, focus skipped", pane.id);
            }
        }
    }

    /// Mark this tab as the selected tab of its window (or not)
    ///
    /// Focusing the tab focuses its active leaf.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if focused {
            self.focus_active_pane();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether any session in this tab has finished starting up
    pub fn is_session_initialized(&self) -> bool {
        self.session_initialized
    }
}
