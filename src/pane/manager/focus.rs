//! Focus and navigation operations for PaneManager
//!
//! Handles the active-leaf flag, directional navigation, and closing panes
//! with automatic focus transfer.

use super::PaneManager;
use super::creation::RemoveResult;
use crate::pane::types::{NavigationDirection, Pane, PaneId};

/// A pane taken out of the tree by [`PaneManager::close_pane`]
#[derive(Debug)]
pub struct ClosedPane {
    /// The removed leaf, session still attached
    pub pane: Box<Pane>,
    /// New active leaf, if the closed pane was the active one
    pub new_active: Option<PaneId>,
}

impl PaneManager {
    /// Make `id` the only active leaf
    ///
    /// Returns true if the active leaf changed. Unknown IDs and the
    /// already-active leaf leave everything as it was.
    pub fn set_active(&mut self, id: PaneId) -> bool {
        if self.active_pane_id == Some(id) {
            return false;
        }
        let Some(root) = self.root.as_mut() else {
            return false;
        };
        if !root.mark_active(id) {
            log::debug!("Ignoring activation of unknown pane {}", id);
            return false;
        }
        self.active_pane_id = Some(id);
        true
    }

    /// Re-read the cached active ID from the tree's flags
    pub(super) fn rederive_active(&mut self) {
        self.active_pane_id = self.root.as_ref().and_then(|r| r.find_active_id());
    }

    /// Close a pane by ID
    ///
    /// Returns None if the pane is not in the tree. When the active pane
    /// closes, the first leaf of the promoted sibling becomes active.
    pub fn close_pane(&mut self, id: PaneId) -> Option<ClosedPane> {
        crate::debug_info!("PANE_CLOSE", "close_pane called for pane {}", id);

        let root = self.root.take()?;
        match Self::remove_pane(root, id) {
            RemoveResult::Removed {
                node,
                pane,
                promoted,
            } => {
                self.root = node;
                self.rederive_active();

                let mut new_active = None;
                if pane.is_active()
                    && let Some(next) = promoted
                    && self.set_active(next)
                {
                    crate::debug_info!(
                        "PANE_CLOSE",
                        "Closed active pane {}, new active: {}",
                        id,
                        next
                    );
                    new_active = Some(next);
                }

                self.recalculate_bounds();
                crate::debug_info!(
                    "PANE_CLOSE",
                    "Successfully closed pane {}, {} remaining",
                    id,
                    self.pane_count()
                );
                Some(ClosedPane { pane, new_active })
            }
            RemoveResult::NotFound(root) => {
                crate::debug_info!("PANE_CLOSE", "Pane {} not found in tree", id);
                self.root = Some(root);
                None
            }
        }
    }

    /// The pane reached by moving from the active pane in `direction`
    pub fn navigation_target(&self, direction: NavigationDirection) -> Option<PaneId> {
        let active_id = self.active_pane_id?;
        let target = self
            .root
            .as_ref()?
            .find_pane_in_direction(active_id, direction);
        log::debug!(
            "Navigation {:?} from pane {} resolves to {:?}",
            direction,
            active_id,
            target
        );
        target
    }

    /// Get the active pane
    pub fn active_pane(&self) -> Option<&Pane> {
        self.active_pane_id
            .and_then(|id| self.root.as_ref()?.find_pane(id))
    }

    /// Get the active pane mutably
    pub fn active_pane_mut(&mut self) -> Option<&mut Pane> {
        let id = self.active_pane_id?;
        self.root.as_mut()?.find_pane_mut(id)
    }

    /// Get the active pane ID
    pub fn active_pane_id(&self) -> Option<PaneId> {
        self.active_pane_id
    }
}
