//! Layout management operations for PaneManager
//!
//! Handles root-anchored bounds calculation, keyboard resizing of split
//! ratios, and the size checks that gate splitting.

use super::PaneManager;
use crate::pane::types::{
    NavigationDirection, PaneBounds, PaneId, ResizeOutcome, Size, SplitDirection,
};

impl PaneManager {
    /// Set the total size available for panes and recalculate layout
    pub fn set_size(&mut self, size: Size) {
        self.total_size = Some(size);
        self.recalculate_bounds();
    }

    /// Last size handed to the root
    pub fn total_size(&self) -> Option<Size> {
        self.total_size
    }

    /// Recalculate bounds for all panes
    ///
    /// Does nothing until a size has been set.
    pub fn recalculate_bounds(&mut self) {
        if let Some(size) = self.total_size
            && let Some(ref mut root) = self.root
        {
            root.calculate_bounds(PaneBounds::from_size(size));
        }
    }

    /// Move the divider nearest the active pane one step toward `direction`
    ///
    /// Panes are relaid out only when the ratio actually changed.
    pub fn resize_active(&mut self, direction: NavigationDirection) -> ResizeOutcome {
        let Some(active_id) = self.active_pane_id else {
            return ResizeOutcome::NoSplit;
        };
        let step = self.resize_step;
        let min_size = self.min_size;
        let outcome = match self.root.as_mut() {
            Some(root) => root.resize_toward(active_id, direction, step, min_size),
            None => ResizeOutcome::NoSplit,
        };
        match outcome {
            ResizeOutcome::Resized => self.recalculate_bounds(),
            ResizeOutcome::Unchanged => {
                log::debug!("Divider around pane {} already at its limit", active_id)
            }
            ResizeOutcome::NoSplit => log::debug!(
                "No split to resize {:?} around pane {}",
                direction,
                active_id
            ),
        }
        outcome
    }

    /// Whether pane `id` is large enough to split in `direction`
    pub fn can_split(&self, id: PaneId, direction: SplitDirection) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.can_split(id, direction, self.min_size))
    }

    /// Orientation an automatic split of the active pane would use
    ///
    /// Falls back to `Vertical` when there is no active pane.
    pub fn pre_calculate_auto_split(&self, available: Size) -> SplitDirection {
        self.active_pane_id
            .and_then(|id| self.root.as_ref()?.pre_calculate_auto_split(id, available))
            .unwrap_or(SplitDirection::Vertical)
    }
}
