//! Celestial animation and sky scene rendering for horizon.
//!
//! The [`Animator`] turns clock readings into [`SkySnapshot`]s: sun and
//! moon positions on an arc, the daylight fraction and the blended palette
//! for every layer. [`SceneState`] owns the seeded decoration (stars and
//! trees) and paints a snapshot into a terminal frame.

mod animator;
mod blend;
mod canvas;
mod celestial;
mod chars;
mod clock;
mod layers;
mod parallax;
mod rng;
mod snapshot;
mod state;

pub use animator::{Animator, DEFAULT_HORIZON_RATIO};
pub use blend::{Blend, DUSK_THRESHOLD, NIGHT_THRESHOLD};
pub use canvas::{Canvas, Cell};
pub use celestial::{BodyPosition, arc_radius, moon_angle, project, sun_angle, sun_opacity};
pub use clock::{Clock, DEFAULT_CYCLE_MS, DayCycle, SystemClock, TimeCursor, simulated_time};
pub use layers::stars::Star;
pub use layers::trees::Tree;
pub use parallax::Parallax;
pub use rng::{Lcg, RandomSource};
pub use snapshot::SkySnapshot;
pub use state::{DEFAULT_STAR_COUNT, SceneState};
