//! Day/dusk/night palettes for each layer of the scene.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Reference colors for one visual layer at day, dusk and night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTriple {
    pub day: Rgb,
    pub dusk: Rgb,
    pub night: Rgb,
}

impl PaletteTriple {
    /// Create a palette triple from packed `0xRRGGBB` values.
    pub const fn from_u32(day: u32, dusk: u32, night: u32) -> Self {
        Self {
            day: Rgb::from_u32(day),
            dusk: Rgb::from_u32(dusk),
            night: Rgb::from_u32(night),
        }
    }
}

/// Coarse phase of the simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Day,
    Dusk,
    Night,
}

impl Phase {
    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Day => "day",
            Phase::Dusk => "dusk",
            Phase::Night => "night",
        }
    }
}

/// Every palette the scene blends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenePalettes {
    pub sky: PaletteTriple,
    pub far_mountain: PaletteTriple,
    pub middle_mountain: PaletteTriple,
    pub close_mountain: PaletteTriple,
    pub trees: PaletteTriple,
    /// Sun disc color.
    pub sun: Rgb,
    /// Moon disc color.
    pub moon: Rgb,
    /// Brightest star color; dimmer stars blend toward the sky.
    pub star: Rgb,
}

impl Default for ScenePalettes {
    fn default() -> Self {
        Self {
            sky: PaletteTriple::from_u32(0x87ceeb, 0xfb8b24, 0x1a1e33),
            far_mountain: PaletteTriple::from_u32(0x9095b3, 0xfb8b24, 0x2b304d),
            middle_mountain: PaletteTriple::from_u32(0x7a7f9e, 0xffb703, 0x4a4e69),
            close_mountain: PaletteTriple::from_u32(0x6a6b85, 0xf5d6a1, 0x5a5d77),
            trees: PaletteTriple::from_u32(0x4a4e69, 0xa87a6f, 0x1a1e33),
            sun: Rgb::from_u32(0xf5d6a1),
            moon: Rgb::from_u32(0xd1d5db),
            star: Rgb::from_u32(0xffffff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sky_palette() {
        let sky = ScenePalettes::default().sky;
        assert_eq!(sky.day.to_hex(), "#87ceeb");
        assert_eq!(sky.dusk.to_hex(), "#fb8b24");
        assert_eq!(sky.night.to_hex(), "#1a1e33");
        assert_eq!(Phase::default().name(), "day");
    }

    #[test]
    fn test_palettes_deserialize_partial() {
        let palettes: ScenePalettes = toml::from_str(
            r##"
            moon = "#ffffff"

            [sky]
            day = "#000000"
            dusk = "#111111"
            night = "#222222"
            "##,
        )
        .unwrap();
        assert_eq!(palettes.sky.day, Rgb::new(0, 0, 0));
        assert_eq!(palettes.moon, Rgb::new(255, 255, 255));
        // Untouched layers keep their defaults
        assert_eq!(palettes.trees, ScenePalettes::default().trees);
    }

    #[test]
    fn test_palettes_reject_bad_color() {
        let result: Result<ScenePalettes, _> = toml::from_str("sun = \"#12\"");
        assert!(result.is_err());
    }
}
