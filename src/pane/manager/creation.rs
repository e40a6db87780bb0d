//! Pane creation operations for PaneManager
//!
//! Handles creating the initial pane, splitting an existing leaf, and
//! removing a leaf from the tree.

use super::PaneManager;
use crate::error::PaneError;
use crate::pane::session::Session;
use crate::pane::types::{Pane, PaneId, PaneNode, ProfileId, SplitDirection};

/// Result of removing a leaf from a subtree
pub(super) enum RemoveResult {
    /// The leaf was found and taken out
    Removed {
        /// What is left of the subtree (None if the subtree was the leaf)
        node: Option<PaneNode>,
        /// The removed leaf
        pane: Box<Pane>,
        /// First leaf of the sibling promoted into the parent's slot
        promoted: Option<PaneId>,
    },
    /// The leaf is not in this subtree, which is handed back untouched
    NotFound(PaneNode),
}

impl PaneManager {
    /// Create the initial pane (when tab is first created)
    pub(super) fn create_initial_pane(
        &mut self,
        profile: ProfileId,
        session: Box<dyn Session>,
    ) -> PaneId {
        let id = self.allocate_id();
        let mut pane = Pane::new(id, profile, session);
        pane.active = true;
        self.root = Some(PaneNode::leaf(pane));
        self.active_pane_id = Some(id);

        crate::debug_info!("PANE_CREATE", "Created initial pane {}", id);
        id
    }

    fn allocate_id(&mut self) -> PaneId {
        let id = self.next_pane_id;
        self.next_pane_id += 1;
        id
    }

    /// Split `target_id`, putting a new pane hosting `session` beside it
    ///
    /// The original pane becomes the first child; the active leaf is left
    /// where it was. Returns `(first, second)`. Fails without touching the
    /// tree if the pane is unknown or too small.
    pub fn split_pane(
        &mut self,
        target_id: PaneId,
        direction: SplitDirection,
        profile: ProfileId,
        session: Box<dyn Session>,
    ) -> Result<(PaneId, PaneId), PaneError> {
        let root = self.root.as_ref().ok_or(PaneError::PaneNotFound(target_id))?;
        if !root.contains_pane(target_id) {
            return Err(PaneError::PaneNotFound(target_id));
        }
        if !root.can_split(target_id, direction, self.min_size) {
            crate::debug_log!(
                "PANE_SPLIT",
                "Pane {} too small to split {:?}",
                target_id,
                direction
            );
            return Err(PaneError::TooSmall { direction });
        }

        let new_id = self.allocate_id();
        let new_pane = Pane::new(new_id, profile, session);

        if let Some(root) = self.root.take() {
            let (new_root, _) =
                Self::split_node(root, target_id, direction, self.split_ratio, Some(new_pane));
            self.root = Some(new_root);
        }

        self.rederive_active();
        self.recalculate_bounds();

        crate::debug_info!(
            "PANE_SPLIT",
            "Split pane {} {:?}, created new pane {}. First(left/top)={} Second(right/bottom)={}",
            target_id,
            direction,
            new_id,
            target_id,
            new_id
        );

        Ok((target_id, new_id))
    }

    /// Split a node, finding the target pane and replacing it with a split
    ///
    /// Returns (new_node, remaining_pane) where remaining_pane is Some if
    /// the target was not found in this subtree.
    pub(super) fn split_node(
        node: PaneNode,
        target_id: PaneId,
        direction: SplitDirection,
        ratio: f32,
        new_pane: Option<Pane>,
    ) -> (PaneNode, Option<Pane>) {
        match node {
            PaneNode::Leaf(pane) => match new_pane {
                Some(new) if pane.id == target_id => (
                    PaneNode::split(direction, ratio, PaneNode::Leaf(pane), PaneNode::leaf(new)),
                    None,
                ),
                // Not the target, keep as-is and pass the new pane through
                other => (PaneNode::Leaf(pane), other),
            },
            PaneNode::Split {
                direction: split_dir,
                ratio: split_ratio,
                bounds,
                first,
                second,
            } => {
                let (new_first, remaining) =
                    Self::split_node(*first, target_id, direction, ratio, new_pane);
                let (new_second, remaining) = if remaining.is_none() {
                    (*second, None)
                } else {
                    Self::split_node(*second, target_id, direction, ratio, remaining)
                };
                (
                    PaneNode::Split {
                        direction: split_dir,
                        ratio: split_ratio,
                        bounds,
                        first: Box::new(new_first),
                        second: Box::new(new_second),
                    },
                    remaining,
                )
            }
        }
    }

    /// Remove a pane from the tree, returning the new tree structure
    ///
    /// The parent split of the removed leaf is replaced by the sibling
    /// subtree, unchanged.
    pub(super) fn remove_pane(node: PaneNode, target_id: PaneId) -> RemoveResult {
        match node {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    RemoveResult::Removed {
                        node: None,
                        pane,
                        promoted: None,
                    }
                } else {
                    RemoveResult::NotFound(PaneNode::Leaf(pane))
                }
            }
            PaneNode::Split {
                direction,
                ratio,
                bounds,
                first,
                second,
            } => match Self::remove_pane(*first, target_id) {
                RemoveResult::Removed {
                    node: None, pane, ..
                } => {
                    // First child was the target; the second takes this slot
                    RemoveResult::Removed {
                        promoted: Some(second.first_pane_id()),
                        node: Some(*second),
                        pane,
                    }
                }
                RemoveResult::Removed {
                    node: Some(new_first),
                    pane,
                    promoted,
                } => RemoveResult::Removed {
                    node: Some(PaneNode::Split {
                        direction,
                        ratio,
                        bounds,
                        first: Box::new(new_first),
                        second,
                    }),
                    pane,
                    promoted,
                },
                RemoveResult::NotFound(first_node) => match Self::remove_pane(*second, target_id) {
                    RemoveResult::Removed {
                        node: None, pane, ..
                    } => RemoveResult::Removed {
                        promoted: Some(first_node.first_pane_id()),
                        node: Some(first_node),
                        pane,
                    },
                    RemoveResult::Removed {
                        node: Some(new_second),
                        pane,
                        promoted,
                    } => RemoveResult::Removed {
                        node: Some(PaneNode::Split {
                            direction,
                            ratio,
                            bounds,
                            first: Box::new(first_node),
                            second: Box::new(new_second),
                        }),
                        pane,
                        promoted,
                    },
                    RemoveResult::NotFound(second_node) => RemoveResult::NotFound(PaneNode::Split {
                        direction,
                        ratio,
                        bounds,
                        first: Box::new(first_node),
                        second: Box::new(second_node),
                    }),
                },
            },
        }
    }
}
