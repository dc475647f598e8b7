//! Palette selection from the daylight fraction.

use horizon_core::{PaletteTriple, Phase, Rgb};

/// Above this daylight fraction the palette blends day into dusk.
pub const DUSK_THRESHOLD: f32 = 0.7;

/// At or below this daylight fraction the palette is pure night.
pub const NIGHT_THRESHOLD: f32 = 0.2;

/// Which two reference colors to mix, and how far along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blend {
    /// `0.0` is pure day, `1.0` pure dusk.
    DayToDusk(f32),
    /// `0.0` is pure dusk, `1.0` pure night.
    DuskToNight(f32),
    Night,
}

impl Blend {
    /// Select the blend for a daylight fraction. Factors are clamped to
    /// `0.0..=1.0`.
    pub fn from_sun_opacity(opacity: f32) -> Self {
        if opacity > DUSK_THRESHOLD {
            let t = (1.0 - opacity) / (1.0 - DUSK_THRESHOLD);
            Blend::DayToDusk(t.clamp(0.0, 1.0))
        } else if opacity > NIGHT_THRESHOLD {
            let t = (DUSK_THRESHOLD - opacity) / (DUSK_THRESHOLD - NIGHT_THRESHOLD);
            Blend::DuskToNight(t.clamp(0.0, 1.0))
        } else {
            Blend::Night
        }
    }

    /// Mix a palette triple.
    pub fn apply(&self, palette: &PaletteTriple) -> Rgb {
        match *self {
            Blend::DayToDusk(t) => palette.day.lerp(palette.dusk, t),
            Blend::DuskToNight(t) => palette.dusk.lerp(palette.night, t),
            Blend::Night => palette.night,
        }
    }

    /// Nearest reference phase.
    pub fn phase(&self) -> Phase {
        match *self {
            Blend::DayToDusk(t) if t < 0.5 => Phase::Day,
            Blend::DayToDusk(_) => Phase::Dusk,
            Blend::DuskToNight(t) if t < 0.5 => Phase::Dusk,
            Blend::DuskToNight(_) | Blend::Night => Phase::Night,
        }
    }
}
