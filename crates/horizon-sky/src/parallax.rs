//! Scroll-driven parallax offsets and fades.

use horizon_core::MountainLayer;

/// Rows the sun and moon move per row scrolled.
pub const BODY_SCROLL_FACTOR: f32 = 0.2;

/// Sun and moon alpha lost per row scrolled.
pub const BODY_FADE_PER_ROW: f32 = 0.048;

/// Star alpha lost per row scrolled.
pub const STAR_FADE_PER_ROW: f32 = 0.016;

/// Rows the title moves per row scrolled.
pub const TITLE_SCROLL_FACTOR: f32 = 0.1;

/// Rows the tagline moves per row scrolled.
pub const TAGLINE_SCROLL_FACTOR: f32 = 0.15;

/// Title and tagline alpha lost per row scrolled.
pub const TEXT_FADE_PER_ROW: f32 = 0.032;

/// Vertical scroll state of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    scroll: f32,
    max_scroll: f32,
}

impl Parallax {
    /// Create an unscrolled scene that can scroll up to `max_scroll` rows.
    pub fn new(max_scroll: f32) -> Self {
        Self {
            scroll: 0.0,
            max_scroll: max_scroll.max(0.0),
        }
    }

    /// Scroll by `delta` rows (negative scrolls back up).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll);
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Downward shift of a mountain layer in rows.
    pub fn layer_shift(&self, layer: MountainLayer) -> f32 {
        self.scroll * layer.scroll_factor()
    }

    /// Downward shift of the sun and moon in rows.
    pub fn body_shift(&self) -> f32 {
        self.scroll * BODY_SCROLL_FACTOR
    }

    /// Alpha multiplier for the sun and moon.
    pub fn body_alpha(&self) -> f32 {
        (1.0 - self.scroll * BODY_FADE_PER_ROW).clamp(0.0, 1.0)
    }

    /// Alpha multiplier for the star field.
    pub fn star_alpha(&self) -> f32 {
        (1.0 - self.scroll * STAR_FADE_PER_ROW).clamp(0.0, 1.0)
    }

    /// Downward shift of the title in rows.
    pub fn title_shift(&self) -> f32 {
        self.scroll * TITLE_SCROLL_FACTOR
    }

    /// Downward shift of the tagline in rows.
    pub fn tagline_shift(&self) -> f32 {
        self.scroll * TAGLINE_SCROLL_FACTOR
    }

    /// Alpha multiplier for the title and tagline.
    pub fn text_alpha(&self) -> f32 {
        (1.0 - self.scroll * TEXT_FADE_PER_ROW).clamp(0.0, 1.0)
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::new(40.0)
    }
}
