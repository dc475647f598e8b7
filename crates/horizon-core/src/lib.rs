//! Core types shared by the horizon crates.
//!
//! Colors, palette triples and the mountain layer table live here so the
//! animator, the configuration and the terminal front end agree on them.

mod color;
mod layer;
mod palette;

pub use color::{ParseColorError, Rgb};
pub use layer::MountainLayer;
pub use palette::{PaletteTriple, Phase, ScenePalettes};
