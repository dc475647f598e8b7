//! Night-time star field.

use std::f32::consts::TAU;

use horizon_core::Rgb;

use crate::canvas::Canvas;
use crate::chars::STAR_CHARS;
use crate::rng::RandomSource;

/// Alpha below which a star is not drawn.
const MIN_VISIBLE_ALPHA: f32 = 0.05;

/// A single star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position as a fraction of the viewport width.
    pub x: f32,
    /// Vertical position as a fraction of the viewport height.
    pub y: f32,
    /// Size category (0..=2).
    pub size: u8,
    /// Peak brightness in `0.0..1.0`.
    pub brightness: f32,
    /// Full twinkle period in milliseconds.
    pub twinkle_period_ms: u32,
    /// Twinkle phase offset in `0.0..1.0`.
    pub twinkle_offset: f32,
}

/// Scatter `count` stars over the viewport.
pub fn generate(count: usize, rng: &mut impl RandomSource) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.next_f32(),
            y: rng.next_f32(),
            size: ((rng.next_f32() * STAR_CHARS.len() as f32) as u8).min(2),
            brightness: rng.next_f32(),
            twinkle_period_ms: rng.range(5_000.0, 10_000.0) as u32,
            twinkle_offset: rng.next_f32(),
        })
        .collect()
}

/// Twinkle multiplier in `0.3..=1.0`.
pub fn twinkle(star: &Star, elapsed_ms: u64) -> f32 {
    let period = star.twinkle_period_ms.max(1) as f64;
    let phase = ((elapsed_ms as f64 / period) as f32 + star.twinkle_offset).fract();
    0.65 + 0.35 * (phase * TAU).sin()
}

/// Draw the star field, fading each star into `sky` by its alpha.
pub fn paint(
    canvas: &mut Canvas,
    stars: &[Star],
    sky: Rgb,
    star_color: Rgb,
    alpha: f32,
    elapsed_ms: u64,
) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;

    for star in stars {
        let a = star.brightness * twinkle(star, elapsed_ms) * alpha;
        if a < MIN_VISIBLE_ALPHA {
            continue;
        }
        let x = (star.x * width) as i32;
        let y = (star.y * height) as i32;
        let ch = STAR_CHARS[star.size as usize % STAR_CHARS.len()];
        canvas.set_glyph(x, y, ch, sky.lerp(star_color, a));
    }
}
