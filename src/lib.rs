// Library exports for the split-pane tab coordinator
//
// # Threading
//
// A `Tab` and everything it owns lives on one coordination thread. Sessions
// report back by posting into the tab's mailbox (a `tokio::sync::mpsc`
// unbounded channel) and the owner drains it with `Tab::process_pending()`.
// The tree itself is never locked.
//
// The only lock in the crate is the `parking_lot::Mutex` guarding the debug
// log file.

#[macro_use]
pub mod debug;

pub mod error;
pub mod pane;
pub mod tab;

pub use error::PaneError;
pub use pane::{
    NavigationDirection, Pane, PaneBounds, PaneEvent, PaneId, PaneManager, PaneNode,
    ResizeOutcome, Session, Size, SplitDirection,
};
pub use tab::{
    PaneEventSink, RenameKey, RenameState, Tab, TabColor, TabEvent, TabHandle, TabHeader,
    ThemeSlot,
};
pub use tabpane_config::{Config, LogLevel, ProfileId, TabId};
