//! Sun and moon placement on the sky arc.
//!
//! Angles are measured so that progress 0 sits on the left end of the
//! horizon, 0.25 at the top of the arc, 0.5 on the right end and 0.75 at
//! the bottom. The moon always rides opposite the sun.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Arc radius as a fraction of the arc center height.
pub const ARC_RADIUS_FRAC: f32 = 0.7;

/// Horizontal half-width of the arc as a fraction of the viewport width.
pub const ARC_HALF_WIDTH: f32 = 0.35;

/// Sun disc radius as a fraction of the arc radius.
pub const DISC_RADIUS_FRAC: f32 = 0.08;

/// Width of the opacity fade band around the horizon, as a fraction of the
/// arc radius.
pub const FADE_BAND_FRAC: f32 = 0.3;

/// Projected screen position of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Vertical position in rows, in the same unit as the arc center.
    pub top: f32,
    /// Horizontal position as a fraction of the viewport width.
    pub left: f32,
    /// Whether the body is above the horizon line.
    pub visible: bool,
}

/// Sun angle for a cycle progress.
pub fn sun_angle(day_progress: f64) -> f64 {
    day_progress * TAU - FRAC_PI_2
}

/// Moon angle, antipodal to the sun.
pub fn moon_angle(sun_angle: f64) -> f64 {
    sun_angle + PI
}

/// Radius of the arc for a given arc center height.
pub fn arc_radius(arc_center_y: f32) -> f32 {
    ARC_RADIUS_FRAC * arc_center_y
}

/// Radius of the sun and moon discs for a given arc center height.
pub fn disc_radius(arc_center_y: f32) -> f32 {
    DISC_RADIUS_FRAC * arc_radius(arc_center_y)
}

/// Project an arc angle onto the screen.
pub fn project(angle: f64, arc_center_y: f32) -> BodyPosition {
    let center = arc_center_y as f64;
    let radius = arc_radius(arc_center_y) as f64;

    let top = (center - radius * angle.cos()) as f32;
    let left = (0.5 + ARC_HALF_WIDTH as f64 * angle.sin()) as f32;

    BodyPosition {
        top,
        left,
        visible: top < arc_center_y,
    }
}

/// Daylight fraction derived from the sun's height over the horizon.
///
/// 1 while the bottom edge of the disc is clear of the fade band, 0 once it
/// is below it, linear in between.
pub fn sun_opacity(sun: &BodyPosition, arc_center_y: f32) -> f32 {
    let radius = arc_radius(arc_center_y);
    let band = FADE_BAND_FRAC * radius;
    if band <= 0.0 {
        return if sun.visible { 1.0 } else { 0.0 };
    }

    let bottom_elevation = arc_center_y - (sun.top + disc_radius(arc_center_y));
    ((bottom_elevation + band / 2.0) / band).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: f32 = 40.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_moon_is_antipodal() {
        for i in 0..100 {
            let p = i as f64 / 100.0;
            let sun = sun_angle(p);
            let moon = moon_angle(sun);
            let diff = (moon - sun).rem_euclid(TAU);
            assert!((diff - PI).abs() < 1e-12, "progress {p}: diff {diff}");
        }
    }

    #[test]
    fn test_sunrise_on_left_horizon() {
        let sun = project(sun_angle(0.0), CENTER);
        assert!(approx(sun.top, CENTER));
        assert!(approx(sun.left, 0.5 - ARC_HALF_WIDTH));
    }

    #[test]
    fn test_noon_at_top_of_arc() {
        let sun = project(sun_angle(0.25), CENTER);
        assert!(approx(sun.top, CENTER - arc_radius(CENTER)));
        assert!(approx(sun.left, 0.5));
        assert!(sun.visible);

        let moon = project(moon_angle(sun_angle(0.25)), CENTER);
        assert!(approx(moon.top, CENTER + arc_radius(CENTER)));
        assert!(!moon.visible);
    }

    #[test]
    fn test_half_cycle_swaps_bodies() {
        for p in [0.0, 0.1, 0.2, 0.3, 0.45] {
            let sun_a = project(sun_angle(p), CENTER);
            let moon_a = project(moon_angle(sun_angle(p)), CENTER);
            let sun_b = project(sun_angle(p + 0.5), CENTER);
            let moon_b = project(moon_angle(sun_angle(p + 0.5)), CENTER);

            assert!(approx(sun_b.top, moon_a.top));
            assert!(approx(sun_b.left, moon_a.left));
            assert!(approx(moon_b.top, sun_a.top));
            assert!(approx(moon_b.left, sun_a.left));
        }
    }

    #[test]
    fn test_opacity_full_day_and_night() {
        let noon = project(sun_angle(0.25), CENTER);
        assert_eq!(sun_opacity(&noon, CENTER), 1.0);

        let midnight = project(sun_angle(0.75), CENTER);
        assert_eq!(sun_opacity(&midnight, CENTER), 0.0);
    }

    #[test]
    fn test_opacity_fades_through_band() {
        // Rising sun: opacity never decreases as it climbs
        let mut last = 0.0;
        for i in 0..=50 {
            let p = -0.05 + i as f64 * 0.002;
            let sun = project(sun_angle(p), CENTER);
            let o = sun_opacity(&sun, CENTER);
            assert!(o >= last - 1e-6);
            last = o;
        }

        // On the horizon the disc is half-submerged: partial opacity
        let horizon = project(sun_angle(0.0), CENTER);
        let o = sun_opacity(&horizon, CENTER);
        assert!(o > 0.0 && o < 1.0);
    }

    #[test]
    fn test_degenerate_viewport() {
        let sun = project(sun_angle(0.3), 0.0);
        assert_eq!(sun.top, 0.0);
        assert_eq!(sun_opacity(&sun, 0.0), 0.0);
    }
}
