//! Custom tab colors.
//!
//! A user-picked color is turned into a full set of header resources:
//! a contrasting text color, an accent for hover, and a translucent
//! variant for the deselected state. Applying and clearing both run
//! through the tab mailbox.

use serde::{Deserialize, Serialize};

use super::Tab;
use super::TabEvent;
use super::header::ThemeSlot;
use super::mailbox::DeferredTask;

/// An RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Colors above this perceived brightness get black text
const BRIGHTNESS_THRESHOLD: u32 = 128;

/// HSL lightness shift used for the accent shade
const ACCENT_LIGHTNESS_SHIFT: f32 = 0.1;

impl TabColor {
    pub const BLACK: TabColor = TabColor::rgb(0, 0, 0);
    pub const WHITE: TabColor = TabColor::rgb(255, 255, 255);

    /// Opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The same color with alpha replaced
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Perceived brightness on a 0-255 scale
    pub fn brightness(&self) -> u32 {
        (299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000
    }

    pub fn is_bright(&self) -> bool {
        self.brightness() > BRIGHTNESS_THRESHOLD
    }

    /// Black on bright colors, white on dark ones
    pub fn contrasting_foreground(&self) -> TabColor {
        if self.is_bright() {
            TabColor::BLACK
        } else {
            TabColor::WHITE
        }
    }

    /// Hover shade: lightness pulled toward the middle by a fixed step
    pub fn accent(&self) -> TabColor {
        let (h, s, l) = self.to_hsl();
        let l = if l > 0.5 {
            l - ACCENT_LIGHTNESS_SHIFT
        } else {
            l + ACCENT_LIGHTNESS_SHIFT
        };
        Self::from_hsl(h, s, l.clamp(0.0, 1.0)).with_alpha(self.a)
    }

    /// Hue in degrees, saturation and lightness in [0, 1]
    fn to_hsl(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h, s, l)
    }

    fn from_hsl(h: f32, s: f32, l: f32) -> TabColor {
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        TabColor::rgb(channel(r), channel(g), channel(b))
    }
}

impl Tab {
    /// The color currently applied to this tab, if any
    pub fn color(&self) -> Option<TabColor> {
        self.color
    }

    /// Queue `color` to be applied on the next [`Tab::process_pending`]
    pub fn set_color(&self, color: TabColor) {
        self.mailbox.post_deferred(DeferredTask::ApplyColor(color));
    }

    /// Queue removal of the custom color
    pub fn clear_color(&self) {
        self.mailbox.post_deferred(DeferredTask::ClearColor);
    }

    pub(super) fn apply_color(&mut self, color: TabColor) {
        let foreground = color.contrasting_foreground();
        let accent = color.accent();
        let deselected = color.with_alpha(self.deselected_alpha);

        for slot in ThemeSlot::ALL {
            let value = match slot {
                ThemeSlot::Background => deselected,
                ThemeSlot::BackgroundSelected | ThemeSlot::BackgroundPressed => color,
                ThemeSlot::BackgroundPointerOver => accent,
                ThemeSlot::Foreground
                | ThemeSlot::ForegroundSelected
                | ThemeSlot::ForegroundPointerOver
                | ThemeSlot::ForegroundPressed
                | ThemeSlot::CloseButtonForegroundActive => foreground,
            };
            self.header.insert_resource(slot, value);
        }
        self.header.refresh_visual_state(self.focused);

        log::info!("Tab {} color set to {:?}", self.id, color);
        self.color = Some(color);
        self.emit(TabEvent::ColorSelected(color));
    }

    /// Remove every color override
    ///
    /// Emits `ColorCleared` only when `notify` is set and a color was applied.
    pub(super) fn apply_clear_color(&mut self, notify: bool) {
        for slot in ThemeSlot::ALL {
            if self.header.has_resource(slot) {
                self.header.remove_resource(slot);
            }
        }
        self.header.refresh_visual_state(self.focused);

        match self.color.take() {
            Some(_) if notify => {
                log::info!("Tab {} color cleared", self.id);
                self.emit(TabEvent::ColorCleared);
            }
            Some(_) => {}
            None => log::debug!("Tab {} had no color to clear", self.id),
        }
    }
}
