//! Shared enums and identifiers for the pane system.

/// Identifier of a leaf pane, unique for the lifetime of its tab
pub type PaneId = u64;

// Re-export ProfileId from tabpane-config for shared access
pub use tabpane_config::ProfileId;

/// Orientation of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SplitDirection {
    /// Panes are stacked vertically (split creates top/bottom panes)
    Horizontal,
    /// Panes are side by side (split creates left/right panes)
    Vertical,
}

impl SplitDirection {
    /// Whether moving in `direction` crosses a divider of this orientation.
    ///
    /// Side-by-side splits are crossed by Left/Right, stacked splits by Up/Down.
    pub fn is_compatible(&self, direction: NavigationDirection) -> bool {
        match self {
            SplitDirection::Vertical => {
                matches!(
                    direction,
                    NavigationDirection::Left | NavigationDirection::Right
                )
            }
            SplitDirection::Horizontal => {
                matches!(direction, NavigationDirection::Up | NavigationDirection::Down)
            }
        }
    }
}

/// Direction for pane navigation and keyboard resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NavigationDirection {
    /// Right and Down point at the second child of a compatible split
    pub fn is_toward_second(&self) -> bool {
        matches!(self, NavigationDirection::Right | NavigationDirection::Down)
    }

    /// Returns the opposite direction.
    pub fn opposite(&self) -> NavigationDirection {
        match self {
            NavigationDirection::Left => NavigationDirection::Right,
            NavigationDirection::Right => NavigationDirection::Left,
            NavigationDirection::Up => NavigationDirection::Down,
            NavigationDirection::Down => NavigationDirection::Up,
        }
    }
}
