//! Core types for the pane system.
//!
//! Sub-modules:
//! - [`bounds`]: `PaneBounds` and `Size` pixel-space geometry
//! - [`common`]: `PaneId`, `SplitDirection`, `NavigationDirection`, re-exports
//! - [`pane`]: `Pane` leaf struct and its `Drop`
//! - [`pane_node`]: `PaneNode` binary tree for pane layout

mod bounds;
mod common;
mod pane;
mod pane_node;


pub use bounds::{PaneBounds, Size};
pub use common::{NavigationDirection, PaneId, ProfileId, SplitDirection};
pub use pane::Pane;
pub use pane_node::{MIN_RATIO, PaneNode, ResizeOutcome};
