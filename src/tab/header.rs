//! Interface to the tab-strip header that presents a tab.
//!
//! The header is a passive view: the tab pushes titles, icons and color
//! resources into it, and the header reports rename input back through
//! [`Tab::rename_key`](super::Tab::rename_key) and
//! [`Tab::rename_lost_focus`](super::Tab::rename_lost_focus).

use super::color::TabColor;

/// Named color resources a tab overrides on its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSlot {
    Background,
    BackgroundSelected,
    BackgroundPointerOver,
    BackgroundPressed,
    Foreground,
    ForegroundSelected,
    ForegroundPointerOver,
    ForegroundPressed,
    CloseButtonForegroundActive,
}

impl ThemeSlot {
    /// Every slot a custom tab color touches
    pub const ALL: [ThemeSlot; 9] = [
        ThemeSlot::Background,
        ThemeSlot::BackgroundSelected,
        ThemeSlot::BackgroundPointerOver,
        ThemeSlot::BackgroundPressed,
        ThemeSlot::Foreground,
        ThemeSlot::ForegroundSelected,
        ThemeSlot::ForegroundPointerOver,
        ThemeSlot::ForegroundPressed,
        ThemeSlot::CloseButtonForegroundActive,
    ];

    /// Resource key understood by the theme layer
    pub fn resource_key(&self) -> &'static str {
        match self {
            ThemeSlot::Background => "tab.header.background",
            ThemeSlot::BackgroundSelected => "tab.header.background.selected",
            ThemeSlot::BackgroundPointerOver => "tab.header.background.pointer_over",
            ThemeSlot::BackgroundPressed => "tab.header.background.pressed",
            ThemeSlot::Foreground => "tab.header.foreground",
            ThemeSlot::ForegroundSelected => "tab.header.foreground.selected",
            ThemeSlot::ForegroundPointerOver => "tab.header.foreground.pointer_over",
            ThemeSlot::ForegroundPressed => "tab.header.foreground.pressed",
            ThemeSlot::CloseButtonForegroundActive => "tab.close_button.foreground.active",
        }
    }
}

/// The header widget presenting one tab
pub trait TabHeader {
    /// Show `title` as the header text
    fn set_title(&mut self, title: &str);

    /// Show the icon at `path`
    fn set_icon(&mut self, path: &str);

    /// Override a color resource
    fn insert_resource(&mut self, slot: ThemeSlot, color: TabColor);

    /// Drop a color override, falling back to the theme
    fn remove_resource(&mut self, slot: ThemeSlot);

    /// Whether `slot` currently carries an override
    fn has_resource(&self, slot: ThemeSlot) -> bool;

    /// Re-apply the visual state so changed resources show immediately
    fn refresh_visual_state(&mut self, focused: bool);

    /// Replace the title with an editable field seeded with `seed` and focus it
    fn begin_rename(&mut self, seed: &str);

    /// Remove the editable field and show the title again
    fn end_rename(&mut self);
}
