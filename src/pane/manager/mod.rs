//! Pane manager for coordinating pane operations within a tab
//!
//! The PaneManager owns the pane tree and provides operations for:
//! - Splitting and closing panes
//! - Tracking the single active leaf
//! - Directional navigation
//! - Root-anchored layout and keyboard resizing
//!
//! Sub-modules:
//! - [`creation`]: Pane creation and tree manipulation (split, remove).
//! - [`focus`]: Active-leaf tracking, navigation and closing.
//! - [`layout`]: Bounds, resize, and split-room checks.

mod creation;
mod focus;
mod layout;


pub use focus::ClosedPane;

use crate::pane::session::Session;
use crate::pane::types::{Pane, PaneId, PaneNode, ProfileId, Size};
use tabpane_config::Config;

/// Manages the pane tree within a single tab
pub struct PaneManager {
    /// Root of the pane tree (None only after the last pane closed)
    pub(super) root: Option<PaneNode>,
    /// Cached ID of the active leaf, re-derived after every shape change
    pub(super) active_pane_id: Option<PaneId>,
    /// Counter for generating unique pane IDs
    pub(super) next_pane_id: PaneId,
    /// Last size handed to the root, if any
    pub(super) total_size: Option<Size>,
    /// Smallest usable pane
    pub(super) min_size: Size,
    /// Ratio of a new split's first child
    pub(super) split_ratio: f32,
    /// Ratio delta per resize step
    pub(super) resize_step: f32,
}

impl PaneManager {
    /// Create a pane manager with one active pane hosting `session`
    pub fn with_initial_pane(
        config: &Config,
        profile: ProfileId,
        session: Box<dyn Session>,
    ) -> Self {
        let mut manager = Self {
            root: None,
            active_pane_id: None,
            next_pane_id: 1,
            total_size: None,
            min_size: Size::new(config.min_pane_width, config.min_pane_height),
            split_ratio: config.split_ratio,
            resize_step: config.resize_step,
        };
        manager.create_initial_pane(profile, session);
        manager
    }

    /// Get the next pane ID that will be assigned
    pub fn next_pane_id(&self) -> PaneId {
        self.next_pane_id
    }

    /// Get a pane by ID
    pub fn get_pane(&self, id: PaneId) -> Option<&Pane> {
        self.root.as_ref()?.find_pane(id)
    }

    /// Get a mutable pane by ID
    pub fn get_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.root.as_mut()?.find_pane_mut(id)
    }

    /// Get all panes
    pub fn all_panes(&self) -> Vec<&Pane> {
        self.root
            .as_ref()
            .map(|r| r.all_panes())
            .unwrap_or_default()
    }

    /// Get all panes mutably
    pub fn all_panes_mut(&mut self) -> Vec<&mut Pane> {
        self.root
            .as_mut()
            .map(|r| r.all_panes_mut())
            .unwrap_or_default()
    }

    /// IDs of all panes in first-then-second order
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.root
            .as_ref()
            .map(|r| r.all_pane_ids())
            .unwrap_or_default()
    }

    /// Mutable references to every pane in first-then-second order
    pub fn panes_mut(&mut self) -> Vec<&mut Pane> {
        self.root
            .as_mut()
            .map(|r| r.all_panes_mut())
            .unwrap_or_default()
    }

    /// Get the number of panes
    pub fn pane_count(&self) -> usize {
        self.root.as_ref().map(|r| r.pane_count()).unwrap_or(0)
    }

    /// Whether the last pane has been closed
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Get access to the root node (for rendering)
    pub fn root(&self) -> Option<&PaneNode> {
        self.root.as_ref()
    }

    /// Detach the whole tree, leaving the manager empty
    pub(crate) fn take_root(&mut self) -> Option<PaneNode> {
        self.active_pane_id = None;
        self.root.take()
    }
}
