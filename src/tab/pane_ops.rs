//! Tab split pane operations.
//!
//! Provides methods for creating, closing, navigating, and resizing split panes
//! within a tab. The tree itself lives in `PaneManager`; these methods add
//! registration, focus and notifications on top.

use std::any::Any;

use super::{Tab, TabEvent};
use crate::error::PaneError;
use crate::pane::{
    NavigationDirection, Pane, PaneId, PaneNode, ProfileId, ResizeOutcome, Session, Size,
    SplitDirection,
};

impl Tab {
    /// Split the active pane, hosting `session` in the new second child
    ///
    /// Returns `(first, second)`; the original pane stays first and active.
    pub fn split_pane(
        &mut self,
        direction: SplitDirection,
        profile: ProfileId,
        session: Box<dyn Session>,
    ) -> Result<(PaneId, PaneId), PaneError> {
        if self.closed {
            return Err(PaneError::TabClosed);
        }
        let active_id = self
            .pane_manager
            .active_pane_id()
            .ok_or(PaneError::TabClosed)?;

        let (first, second) = self
            .pane_manager
            .split_pane(active_id, direction, profile, session)?;
        self.register_pane(second);
        self.update_active_pane(first);

        log::info!(
            "Split tab {} {:?}, new pane {}",
            self.id,
            direction,
            second
        );
        Ok((first, second))
    }

    /// Split the active pane along its longer side
    pub fn split_pane_auto(
        &mut self,
        profile: ProfileId,
        session: Box<dyn Session>,
    ) -> Result<(PaneId, PaneId), PaneError> {
        let available = self.pane_manager.total_size().unwrap_or_default();
        let direction = self.pre_calculate_auto_split(available);
        self.split_pane(direction, profile, session)
    }

    /// Whether the active pane has room to split in `direction`
    pub fn can_split_pane(&self, direction: SplitDirection) -> bool {
        self.pane_manager
            .active_pane_id()
            .is_some_and(|id| self.pane_manager.can_split(id, direction))
    }

    /// Close a pane, shutting down its session
    ///
    /// Closing the last pane closes the tab.
    pub fn close_pane(&mut self, pane_id: PaneId) -> Result<(), PaneError> {
        let closed = self
            .pane_manager
            .close_pane(pane_id)
            .ok_or(PaneError::PaneNotFound(pane_id))?;
        let mut pane = closed.pane;
        self.release_pane(&mut pane);

        if let Some(next) = closed.new_active {
            self.on_active_changed(next);
            self.focus_active_pane();
        }
        if self.pane_manager.is_empty() {
            self.mark_closed();
        }
        Ok(())
    }

    /// Close the active pane
    pub fn close_active_pane(&mut self) -> Result<(), PaneError> {
        let active_id = self
            .pane_manager
            .active_pane_id()
            .ok_or(PaneError::TabClosed)?;
        self.close_pane(active_id)
    }

    /// Close every pane and with it the tab
    pub fn close_tab(&mut self) {
        if self.closed {
            return;
        }
        if let Some(mut root) = self.pane_manager.take_root() {
            for pane in root.all_panes_mut() {
                self.release_pane(pane);
            }
        }
        self.mark_closed();
    }

    fn mark_closed(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        log::info!("Tab {} closed", self.id);
        self.emit(TabEvent::Closed);
    }

    /// Lay the tree out into `size`
    ///
    /// The size is remembered so later splits and closes re-run the layout.
    pub fn resize_content(&mut self, size: Size) {
        self.pane_manager.set_size(size);
    }

    /// Move the divider next to the active pane one step toward `direction`
    ///
    /// `ResizeOutcome::NoSplit` and `Unchanged` are silent no-ops; only
    /// `Resized` relays the panes out.
    pub fn resize_pane(&mut self, direction: NavigationDirection) -> ResizeOutcome {
        self.pane_manager.resize_active(direction)
    }

    /// Move focus to the neighbouring pane in `direction`
    ///
    /// Returns false if there is no pane that way.
    pub fn navigate_focus(&mut self, direction: NavigationDirection) -> bool {
        let Some(target) = self.pane_manager.navigation_target(direction) else {
            return false;
        };
        self.update_active_pane(target);
        self.focus_active_pane();
        true
    }

    /// Orientation an automatic split of the active pane would use in `available`
    pub fn pre_calculate_auto_split(&self, available: Size) -> SplitDirection {
        self.pane_manager.pre_calculate_auto_split(available)
    }

    /// Scroll the active session by `delta` rows
    pub fn scroll(&mut self, delta: i32) {
        if let Some(pane) = self.pane_manager.active_pane_mut() {
            let session = pane.session_mut();
            let offset = session.scroll_offset();
            session.set_scroll_offset(offset.saturating_add(delta));
        }
    }

    /// Number of leaf panes
    pub fn leaf_count(&self) -> usize {
        self.pane_manager.pane_count()
    }

    pub fn active_pane_id(&self) -> Option<PaneId> {
        self.pane_manager.active_pane_id()
    }

    pub fn active_pane(&self) -> Option<&Pane> {
        self.pane_manager.active_pane()
    }

    pub fn get_pane(&self, pane_id: PaneId) -> Option<&Pane> {
        self.pane_manager.get_pane(pane_id)
    }

    /// IDs of all panes in first-then-second order
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.pane_manager.pane_ids()
    }

    /// Root of the pane tree, until the tab closes
    pub fn root(&self) -> Option<&PaneNode> {
        self.pane_manager.root()
    }

    /// Profile of the active pane's session
    pub fn focused_profile(&self) -> Option<ProfileId> {
        self.pane_manager.active_pane().map(|pane| pane.profile)
    }

    /// Push refreshed `settings` to every pane created from `profile`
    ///
    /// Returns how many panes received them.
    pub fn update_settings<S: Any>(&mut self, profile: ProfileId, settings: &S) -> usize {
        let mut applied = 0;
        for pane in self.pane_manager.panes_mut() {
            if pane.profile == profile {
                pane.session_mut().update_settings(settings);
                applied += 1;
            }
        }
        crate::debug_log!(
            "TAB_SETTINGS",
            "Tab {}: settings for profile {} sent to {} pane(s)",
            self.id,
            profile,
            applied
        );
        applied
    }
}
