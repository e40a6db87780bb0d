//! Error types for pane tree and tab operations.

use thiserror::Error;

use crate::pane::{PaneId, SplitDirection};

/// Errors returned by operations on a tab's pane tree
#[derive(Debug, Error)]
pub enum PaneError {
    /// No leaf with this ID is in the tree
    #[error("pane {0} not found")]
    PaneNotFound(PaneId),

    /// The pane cannot hold two halves of the minimum size
    #[error("pane too small to split {direction:?}")]
    TooSmall { direction: SplitDirection },

    /// The tab's last pane has already closed
    #[error("tab is closed")]
    TabClosed,
}
