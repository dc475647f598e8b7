//! The celestial animator: clock in, snapshots out.

use horizon_core::ScenePalettes;

use crate::clock::{Clock, DayCycle, SystemClock, TimeCursor};
use crate::snapshot::SkySnapshot;

/// Default arc center as a fraction of the viewport height.
pub const DEFAULT_HORIZON_RATIO: f32 = 0.62;

/// Owns the animation phase and publishes one [`SkySnapshot`] per tick.
///
/// Ticks are driven by the caller's frame loop. Between [`start`](Self::start)
/// and [`stop`](Self::stop) every [`tick`](Self::tick) reads the clock and
/// recomputes the whole snapshot; nothing carries over from the previous
/// frame except the captured wall offset.
#[derive(Debug)]
pub struct Animator<C: Clock = SystemClock> {
    clock: C,
    cycle: DayCycle,
    palettes: ScenePalettes,
    horizon_ratio: f32,
    arc_center_y: f32,
    cursor: Option<TimeCursor>,
    last: Option<SkySnapshot>,
}

impl Animator<SystemClock> {
    /// Create an animator on the system clock.
    pub fn with_system_clock(cycle: DayCycle, palettes: ScenePalettes) -> Self {
        Self::new(SystemClock::new(), cycle, palettes)
    }
}

impl<C: Clock> Animator<C> {
    /// Create a stopped animator. Call [`resize`](Self::resize) with the
    /// viewport height before the first tick.
    pub fn new(clock: C, cycle: DayCycle, palettes: ScenePalettes) -> Self {
        Self {
            clock,
            cycle,
            palettes,
            horizon_ratio: DEFAULT_HORIZON_RATIO,
            arc_center_y: 0.0,
            cursor: None,
            last: None,
        }
    }

    /// Set the arc center as a fraction of the viewport height.
    pub fn with_horizon_ratio(mut self, ratio: f32) -> Self {
        self.horizon_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Begin publishing snapshots. Has no effect if already running.
    pub fn start(&mut self) {
        if self.cursor.is_some() {
            return;
        }
        let cursor = TimeCursor::capture(&self.clock);
        log::debug!(
            "animator started (cycle {} ms, progress {:.3})",
            self.cycle.cycle_ms(),
            self.cycle.progress(cursor.read(&self.clock))
        );
        self.cursor = Some(cursor);
    }

    /// Stop publishing snapshots. The last snapshot stays readable.
    pub fn stop(&mut self) {
        if self.cursor.take().is_some() {
            log::debug!("animator stopped");
        }
    }

    /// Whether the animator is publishing.
    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    /// Update the arc center from a new viewport height.
    ///
    /// The cycle timer is untouched; positions move on the next tick.
    pub fn resize(&mut self, viewport_height: f32) {
        let arc_center_y = viewport_height.max(0.0) * self.horizon_ratio;
        if arc_center_y != self.arc_center_y {
            log::trace!("arc center {} -> {}", self.arc_center_y, arc_center_y);
            self.arc_center_y = arc_center_y;
        }
    }

    /// Current arc center in rows.
    pub fn arc_center_y(&self) -> f32 {
        self.arc_center_y
    }

    /// Replace the palettes used from the next tick on.
    pub fn set_palettes(&mut self, palettes: ScenePalettes) {
        self.palettes = palettes;
    }

    pub fn palettes(&self) -> &ScenePalettes {
        &self.palettes
    }

    pub fn cycle(&self) -> DayCycle {
        self.cycle
    }

    /// Compute and publish the snapshot for the current clock reading.
    ///
    /// Returns `None` while stopped.
    pub fn tick(&mut self) -> Option<&SkySnapshot> {
        let cursor = self.cursor?;
        let progress = self.cycle.progress(cursor.read(&self.clock));
        self.last = Some(SkySnapshot::compute(
            progress,
            self.arc_center_y,
            &self.palettes,
        ));
        self.last.as_ref()
    }

    /// Publish a snapshot frozen at `day_progress` without starting.
    ///
    /// Used to carry a paused scene over to a rebuilt animator.
    pub fn hold(&mut self, day_progress: f64) -> &SkySnapshot {
        let progress = day_progress.rem_euclid(1.0);
        self.last.insert(SkySnapshot::compute(
            progress,
            self.arc_center_y,
            &self.palettes,
        ))
    }

    /// Most recently published snapshot.
    pub fn snapshot(&self) -> Option<&SkySnapshot> {
        self.last.as_ref()
    }
}
