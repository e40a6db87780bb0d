//! Default value functions for configuration.
//!
//! Each function backs a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field.

// ── Pane sizing ────────────────────────────────────────────────────────────

/// Smallest usable pane width in pixels
pub fn min_pane_width() -> f32 {
    80.0
}

/// Smallest usable pane height in pixels
pub fn min_pane_height() -> f32 {
    40.0
}

/// Share of space given to the first child of a new split
pub fn split_ratio() -> f32 {
    0.5
}

/// Ratio change applied by one keyboard resize step
pub fn resize_step() -> f32 {
    0.05
}

// ── Tab color ──────────────────────────────────────────────────────────────

/// Alpha of the tab color when the tab is not selected
pub fn deselected_tab_alpha() -> u8 {
    64
}
