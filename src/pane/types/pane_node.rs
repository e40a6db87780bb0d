//! Binary tree structure for arbitrary pane nesting.

use super::bounds::{PaneBounds, Size};
use super::common::{NavigationDirection, PaneId, SplitDirection};
use super::pane::Pane;

/// Smallest share of a split either child may be left with
pub const MIN_RATIO: f32 = 0.1;

/// What a divider move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// No ancestor split runs along the requested direction
    NoSplit,
    /// A matching split was found but its ratio could not move
    /// (too small for two usable sides, or already at the clamp)
    Unchanged,
    /// The ratio changed
    Resized,
}

/// Tree node for pane layout
///
/// The pane tree is a binary tree where:
/// - Leaf nodes contain actual terminal panes
/// - Split nodes contain two children with a split direction and ratio
///
/// A split always owns exactly two children. Removing a leaf replaces its
/// parent split with the surviving sibling, so no single-child split exists.
#[derive(Debug)]
pub enum PaneNode {
    /// A leaf node containing a terminal pane
    Leaf(Box<Pane>),
    /// A split containing two child nodes
    Split {
        /// Direction of the split
        direction: SplitDirection,
        /// Split ratio, strictly inside (0, 1) - position of divider
        /// For horizontal: ratio is height of first child / total height
        /// For vertical: ratio is width of first child / total width
        ratio: f32,
        /// Box this split was last laid out into
        bounds: PaneBounds,
        /// First child (top for horizontal, left for vertical)
        first: Box<PaneNode>,
        /// Second child (bottom for horizontal, right for vertical)
        second: Box<PaneNode>,
    },
}

/// Outcome of looking for a neighbour inside one subtree
enum Neighbor {
    /// The source pane is not in this subtree
    NotHere,
    /// The source pane is here but no divider has been crossed yet
    Unresolved,
    /// A target was found
    Found(PaneId),
}

/// Split `bounds` into the boxes of the first and second child
pub(crate) fn child_bounds(
    direction: SplitDirection,
    ratio: f32,
    bounds: PaneBounds,
) -> (PaneBounds, PaneBounds) {
    match direction {
        SplitDirection::Horizontal => {
            // Panes stacked top/bottom
            let first_height = bounds.height * ratio;
            let second_height = bounds.height - first_height;
            (
                PaneBounds::new(bounds.x, bounds.y, bounds.width, first_height),
                PaneBounds::new(
                    bounds.x,
                    bounds.y + first_height,
                    bounds.width,
                    second_height,
                ),
            )
        }
        SplitDirection::Vertical => {
            // Panes side by side
            let first_width = bounds.width * ratio;
            let second_width = bounds.width - first_width;
            (
                PaneBounds::new(bounds.x, bounds.y, first_width, bounds.height),
                PaneBounds::new(
                    bounds.x + first_width,
                    bounds.y,
                    second_width,
                    bounds.height,
                ),
            )
        }
    }
}

impl PaneNode {
    /// Create a new leaf node with a pane
    pub fn leaf(pane: Pane) -> Self {
        PaneNode::Leaf(Box::new(pane))
    }

    /// Create a new split node
    pub fn split(direction: SplitDirection, ratio: f32, first: PaneNode, second: PaneNode) -> Self {
        PaneNode::Split {
            direction,
            ratio: ratio.clamp(MIN_RATIO, 1.0 - MIN_RATIO),
            bounds: PaneBounds::default(),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, PaneNode::Leaf(_))
    }

    /// Get the pane if this is a leaf node
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => Some(pane),
            PaneNode::Split { .. } => None,
        }
    }

    /// Find a pane by ID (recursive)
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(&**pane),
            PaneNode::Split { first, second, .. } => {
                first.find_pane(id).or_else(|| second.find_pane(id))
            }
        }
    }

    /// Find a mutable pane by ID (recursive)
    pub fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(&mut **pane),
            PaneNode::Split { first, second, .. } => first
                .find_pane_mut(id)
                .or_else(move || second.find_pane_mut(id)),
        }
    }

    /// Whether the pane is somewhere in this subtree
    pub fn contains_pane(&self, id: PaneId) -> bool {
        self.find_pane(id).is_some()
    }

    /// Get all pane IDs in this subtree, first child before second
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        match self {
            PaneNode::Leaf(pane) => vec![pane.id],
            PaneNode::Split { first, second, .. } => {
                let mut ids = first.all_pane_ids();
                ids.extend(second.all_pane_ids());
                ids
            }
        }
    }

    /// Get all panes in this subtree
    pub fn all_panes(&self) -> Vec<&Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes();
                panes.extend(second.all_panes());
                panes
            }
        }
    }

    /// Get all mutable panes in this subtree
    pub fn all_panes_mut(&mut self) -> Vec<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes_mut();
                panes.extend(second.all_panes_mut());
                panes
            }
        }
    }

    /// First leaf in first-then-second traversal order
    pub fn first_pane_id(&self) -> PaneId {
        match self {
            PaneNode::Leaf(pane) => pane.id,
            PaneNode::Split { first, .. } => first.first_pane_id(),
        }
    }

    /// Count total number of leaf panes
    pub fn pane_count(&self) -> usize {
        match self {
            PaneNode::Leaf(_) => 1,
            PaneNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// Mark `id` as the only active leaf.
    ///
    /// Walks every leaf; returns false (touching nothing) if `id` is not in
    /// this subtree.
    pub(crate) fn mark_active(&mut self, id: PaneId) -> bool {
        if !self.contains_pane(id) {
            return false;
        }
        for pane in self.all_panes_mut() {
            pane.active = pane.id == id;
        }
        true
    }

    /// ID of the first leaf carrying the active flag
    pub fn find_active_id(&self) -> Option<PaneId> {
        match self {
            PaneNode::Leaf(pane) => pane.active.then_some(pane.id),
            PaneNode::Split { first, second, .. } => {
                first.find_active_id().or_else(|| second.find_active_id())
            }
        }
    }

    /// Calculate bounds for all panes given the total available area
    ///
    /// This recursively distributes space according to split ratios and
    /// hands every leaf its final box. Only meaningful from the root: a
    /// subtree laid out on its own would use a stale parent box.
    pub fn calculate_bounds(&mut self, bounds: PaneBounds) {
        match self {
            PaneNode::Leaf(pane) => pane.apply_bounds(bounds),
            PaneNode::Split {
                direction,
                ratio,
                bounds: split_bounds,
                first,
                second,
            } => {
                *split_bounds = bounds;
                let (first_bounds, second_bounds) = child_bounds(*direction, *ratio, bounds);
                first.calculate_bounds(first_bounds);
                second.calculate_bounds(second_bounds);
            }
        }
    }

    /// Check whether the pane has room for two halves in `direction`
    ///
    /// Uses the bounds from the last layout pass; a pane that was never laid
    /// out has no room.
    pub fn can_split(&self, id: PaneId, direction: SplitDirection, min_size: Size) -> bool {
        let Some(pane) = self.find_pane(id) else {
            return false;
        };
        match direction {
            SplitDirection::Horizontal => pane.bounds.height >= min_size.height * 2.0,
            SplitDirection::Vertical => pane.bounds.width >= min_size.width * 2.0,
        }
    }

    /// Move the divider of the nearest ancestor split compatible with `direction`
    ///
    /// Left/Up shrink the first child, Right/Down grow it. The ratio is
    /// clamped so neither side falls below `min_size`. The walk stops at the
    /// first compatible ancestor even when its ratio cannot move.
    pub fn resize_toward(
        &mut self,
        target: PaneId,
        direction: NavigationDirection,
        step: f32,
        min_size: Size,
    ) -> ResizeOutcome {
        match self {
            PaneNode::Leaf(_) => ResizeOutcome::NoSplit,
            PaneNode::Split {
                direction: split_dir,
                ratio,
                bounds,
                first,
                second,
            } => {
                let child = if first.contains_pane(target) {
                    first
                } else if second.contains_pane(target) {
                    second
                } else {
                    return ResizeOutcome::NoSplit;
                };

                // The closest ancestor wins
                let inner = child.resize_toward(target, direction, step, min_size);
                if inner != ResizeOutcome::NoSplit {
                    return inner;
                }
                if !split_dir.is_compatible(direction) {
                    return ResizeOutcome::NoSplit;
                }

                let (total, min) = match split_dir {
                    SplitDirection::Vertical => (bounds.width, min_size.width),
                    SplitDirection::Horizontal => (bounds.height, min_size.height),
                };
                let (low, high) = if total <= 0.0 {
                    (MIN_RATIO, 1.0 - MIN_RATIO)
                } else if total < min * 2.0 {
                    // No position leaves both sides usable
                    log::debug!("Split too small to resize ({total} < 2 x {min})");
                    return ResizeOutcome::Unchanged;
                } else {
                    let min_share = min / total;
                    (min_share.max(MIN_RATIO), (1.0 - min_share).min(1.0 - MIN_RATIO))
                };

                let delta = if direction.is_toward_second() {
                    step
                } else {
                    -step
                };
                let clamped = (*ratio + delta).clamp(low, high);
                if clamped == *ratio {
                    return ResizeOutcome::Unchanged;
                }
                *ratio = clamped;
                ResizeOutcome::Resized
            }
        }
    }

    /// Find the pane reached by moving from `from_id` in `direction`
    ///
    /// Walks up from the source to the nearest compatible split where the
    /// source sits on the near side, then descends the far side choosing the
    /// child nearest the edge we entered through.
    pub fn find_pane_in_direction(
        &self,
        from_id: PaneId,
        direction: NavigationDirection,
    ) -> Option<PaneId> {
        match self.neighbor(from_id, direction) {
            Neighbor::Found(id) => Some(id),
            Neighbor::NotHere | Neighbor::Unresolved => None,
        }
    }

    fn neighbor(&self, from_id: PaneId, direction: NavigationDirection) -> Neighbor {
        match self {
            PaneNode::Leaf(pane) => {
                if pane.id == from_id {
                    Neighbor::Unresolved
                } else {
                    Neighbor::NotHere
                }
            }
            PaneNode::Split {
                direction: split_dir,
                first,
                second,
                ..
            } => {
                let crosses = split_dir.is_compatible(direction);
                match first.neighbor(from_id, direction) {
                    Neighbor::Found(id) => return Neighbor::Found(id),
                    Neighbor::Unresolved => {
                        return if crosses && direction.is_toward_second() {
                            Neighbor::Found(second.nearest_leaf_from(direction.opposite()))
                        } else {
                            Neighbor::Unresolved
                        };
                    }
                    Neighbor::NotHere => {}
                }
                match second.neighbor(from_id, direction) {
                    Neighbor::Unresolved if crosses && !direction.is_toward_second() => {
                        Neighbor::Found(first.nearest_leaf_from(direction.opposite()))
                    }
                    other => other,
                }
            }
        }
    }

    /// The leaf nearest `edge` of this subtree
    ///
    /// Entering through the left edge yields the leftmost leaf, and so on.
    /// Splits perpendicular to the edge descend into their first child.
    pub fn nearest_leaf_from(&self, edge: NavigationDirection) -> PaneId {
        match self {
            PaneNode::Leaf(pane) => pane.id,
            PaneNode::Split {
                direction,
                first,
                second,
                ..
            } => {
                if direction.is_compatible(edge) && edge.is_toward_second() {
                    second.nearest_leaf_from(edge)
                } else {
                    first.nearest_leaf_from(edge)
                }
            }
        }
    }

    /// Predict the orientation an automatic split of `target` would use
    ///
    /// Distributes `available` down the tree by the current ratios without
    /// touching any stored bounds. Wider-than-tall boxes split side by side.
    /// Returns None if `target` is not in this subtree.
    pub fn pre_calculate_auto_split(
        &self,
        target: PaneId,
        available: Size,
    ) -> Option<SplitDirection> {
        self.pre_calculate_in(target, PaneBounds::from_size(available))
    }

    fn pre_calculate_in(&self, target: PaneId, bounds: PaneBounds) -> Option<SplitDirection> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == target).then(|| {
                if bounds.width > bounds.height {
                    SplitDirection::Vertical
                } else {
                    SplitDirection::Horizontal
                }
            }),
            PaneNode::Split {
                direction,
                ratio,
                first,
                second,
                ..
            } => {
                let (first_bounds, second_bounds) = child_bounds(*direction, *ratio, bounds);
                first
                    .pre_calculate_in(target, first_bounds)
                    .or_else(|| second.pre_calculate_in(target, second_bounds))
            }
        }
    }
}
