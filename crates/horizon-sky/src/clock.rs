//! Time sources and the compressed day cycle.

use std::time::Instant;

use chrono::{NaiveTime, Utc};

/// Default length of one simulated day (two minutes).
pub const DEFAULT_CYCLE_MS: u64 = 120_000;

/// Simulated hour of day at progress 0 (the sun on the left horizon).
const SUNRISE_HOUR: u32 = 6;

/// Source of the two readings the animator needs.
pub trait Clock {
    /// Milliseconds from a monotonic source with an arbitrary origin.
    fn monotonic_ms(&self) -> u64;

    /// Milliseconds since the Unix epoch, from the wall clock.
    fn wall_ms(&self) -> i64;
}

/// Clock backed by [`Instant`] and the system wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn monotonic_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn wall_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Monotonic reading shifted onto the wall clock.
///
/// The offset is captured once, so the cursor never jumps if the wall clock
/// is adjusted, while separate instances started at different moments
/// still agree on the phase of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCursor {
    offset_ms: i64,
}

impl TimeCursor {
    /// Capture the wall offset from the clock's current readings.
    pub fn capture(clock: &impl Clock) -> Self {
        Self {
            offset_ms: clock.wall_ms().wrapping_sub(clock.monotonic_ms() as i64),
        }
    }

    /// Current cursor position in milliseconds.
    pub fn read(&self, clock: &impl Clock) -> i64 {
        self.offset_ms.wrapping_add(clock.monotonic_ms() as i64)
    }
}

/// A real-time span folded into one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCycle {
    cycle_ms: u64,
}

impl DayCycle {
    /// Create a cycle of `cycle_ms` milliseconds, between 1 and `i64::MAX`.
    pub fn new(cycle_ms: u64) -> Self {
        Self {
            cycle_ms: cycle_ms.clamp(1, i64::MAX as u64),
        }
    }

    /// Length of one simulated day in milliseconds.
    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
    }

    /// Fractional position within the cycle, in `0.0..1.0`.
    pub fn progress(&self, cursor_ms: i64) -> f64 {
        let cycle = self.cycle_ms as i64;
        let progress = cursor_ms.rem_euclid(cycle) as f64 / cycle as f64;
        // Guard against rounding up to exactly 1.0 for huge cycles
        if progress >= 1.0 { 0.0 } else { progress }
    }
}

impl Default for DayCycle {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_MS)
    }
}

/// Map cycle progress onto a 24-hour clock, progress 0 being sunrise.
pub fn simulated_time(day_progress: f64) -> NaiveTime {
    let secs_of_day = (day_progress.rem_euclid(1.0) * 86_400.0).floor() as u32;
    let secs = (secs_of_day + SUNRISE_HOUR * 3_600) % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::*;

    /// Clock driven by hand.
    #[derive(Debug)]
    pub(crate) struct ManualClock {
        pub monotonic: Cell<u64>,
        pub wall_at_zero: i64,
    }

    impl ManualClock {
        pub(crate) fn new(wall_at_zero: i64) -> Self {
            Self {
                monotonic: Cell::new(0),
                wall_at_zero,
            }
        }

        pub(crate) fn advance(&self, ms: u64) {
            self.monotonic.set(self.monotonic.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn monotonic_ms(&self) -> u64 {
            self.monotonic.get()
        }

        fn wall_ms(&self) -> i64 {
            self.wall_at_zero + self.monotonic.get() as i64
        }
    }

    #[test]
    fn test_progress_in_range() {
        let cycle = DayCycle::new(120_000);
        for cursor in [0, 1, 59_999, 60_000, 119_999, 120_000, -1, -120_001, i64::MAX] {
            let p = cycle.progress(cursor);
            assert!((0.0..1.0).contains(&p), "cursor {cursor} gave {p}");
        }
        assert_eq!(cycle.progress(30_000), 0.25);
        assert_eq!(cycle.progress(-30_000), 0.75);
    }

    #[test]
    fn test_zero_length_cycle_is_clamped() {
        let cycle = DayCycle::new(0);
        assert_eq!(cycle.cycle_ms(), 1);
        assert_eq!(cycle.progress(12_345), 0.0);
    }

    #[test]
    fn test_huge_cycle_stays_in_range() {
        let cycle = DayCycle::new(u64::MAX);
        assert_eq!(cycle.cycle_ms(), i64::MAX as u64);
        for cursor in [0, 1_700_000_000_000, -1, i64::MIN, i64::MAX] {
            let p = cycle.progress(cursor);
            assert!((0.0..1.0).contains(&p), "cursor {cursor} gave {p}");
        }
    }

    #[test]
    fn test_cursor_follows_monotonic_clock() {
        let clock = ManualClock::new(1_700_000_000_000);
        clock.advance(500);
        let cursor = TimeCursor::capture(&clock);
        assert_eq!(cursor.read(&clock), 1_700_000_000_500);
        clock.advance(250);
        assert_eq!(cursor.read(&clock), 1_700_000_000_750);
    }

    #[test]
    fn test_instances_are_phase_aligned() {
        let clock = ManualClock::new(42_000);
        let early = TimeCursor::capture(&clock);
        clock.advance(10_000);
        let late = TimeCursor::capture(&clock);
        assert_eq!(early.read(&clock), late.read(&clock));
    }

    #[test]
    fn test_simulated_time() {
        assert_eq!(simulated_time(0.0).format("%H:%M").to_string(), "06:00");
        assert_eq!(simulated_time(0.25).format("%H:%M").to_string(), "12:00");
        assert_eq!(simulated_time(0.5).format("%H:%M").to_string(), "18:00");
        assert_eq!(simulated_time(0.75).format("%H:%M").to_string(), "00:00");
    }
}
