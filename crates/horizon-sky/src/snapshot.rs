//! One frame of celestial and palette state.

use chrono::NaiveTime;
use horizon_core::{MountainLayer, Phase, Rgb, ScenePalettes};

use crate::blend::{Blend, NIGHT_THRESHOLD};
use crate::celestial::{self, BodyPosition};
use crate::clock;

/// Everything the scene needs to draw one frame.
///
/// A pure function of cycle progress, arc center and palettes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySnapshot {
    /// Position within the compressed cycle, in `0.0..1.0`.
    pub day_progress: f64,
    /// Arc center the positions were projected against.
    pub arc_center_y: f32,
    pub sun_angle: f64,
    pub moon_angle: f64,
    pub sun: BodyPosition,
    pub moon: BodyPosition,
    /// Daylight fraction in `0.0..=1.0`.
    pub sun_opacity: f32,
    pub blend: Blend,
    pub sky_color: Rgb,
    pub far_mountain_color: Rgb,
    pub middle_mountain_color: Rgb,
    pub close_mountain_color: Rgb,
    pub tree_color: Rgb,
    pub is_night: bool,
}

impl SkySnapshot {
    /// Compute the snapshot for a cycle progress.
    pub fn compute(day_progress: f64, arc_center_y: f32, palettes: &ScenePalettes) -> Self {
        let sun_angle = celestial::sun_angle(day_progress);
        let moon_angle = celestial::moon_angle(sun_angle);
        let sun = celestial::project(sun_angle, arc_center_y);
        let moon = celestial::project(moon_angle, arc_center_y);

        let sun_opacity = celestial::sun_opacity(&sun, arc_center_y);
        let blend = Blend::from_sun_opacity(sun_opacity);

        Self {
            day_progress,
            arc_center_y,
            sun_angle,
            moon_angle,
            sun,
            moon,
            sun_opacity,
            blend,
            sky_color: blend.apply(&palettes.sky),
            far_mountain_color: blend.apply(&palettes.far_mountain),
            middle_mountain_color: blend.apply(&palettes.middle_mountain),
            close_mountain_color: blend.apply(&palettes.close_mountain),
            tree_color: blend.apply(&palettes.trees),
            is_night: sun_opacity <= NIGHT_THRESHOLD,
        }
    }

    /// Fill color of a mountain layer.
    pub fn mountain_color(&self, layer: MountainLayer) -> Rgb {
        match layer {
            MountainLayer::Far => self.far_mountain_color,
            MountainLayer::Middle => self.middle_mountain_color,
            MountainLayer::Close => self.close_mountain_color,
        }
    }

    /// Nearest reference phase.
    pub fn phase(&self) -> Phase {
        self.blend.phase()
    }

    /// Simulated time of day.
    pub fn time_of_day(&self) -> NaiveTime {
        clock::simulated_time(self.day_progress)
    }
}
