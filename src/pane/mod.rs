//! Pane management for split terminal support
//!
//! This module provides the pane infrastructure for a tab:
//! - `Pane`: A single leaf hosting one terminal session
//! - `PaneNode`: Tree structure for nested pane splits
//! - `PaneManager`: Owns the tree and the active-leaf cache
//! - `Session`: The interface a hosted session implements

mod manager;
pub mod session;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use manager::{ClosedPane, PaneManager};
pub use session::{PaneEvent, Session};
pub use types::{
    MIN_RATIO, NavigationDirection, Pane, PaneBounds, PaneId, PaneNode, ProfileId, ResizeOutcome,
    Size, SplitDirection,
};
