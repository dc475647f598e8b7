//! Configuration for horizon.
//!
//! Settings persist as a TOML file in the platform config directory. Every
//! section falls back to defaults, so a partial file is always valid.

mod config;
mod error;

pub use config::{
    CONFIG_FILE, Config, CycleConfig, DisplayConfig, HomeConfig, LogConfig, SceneConfig,
};
pub use error::ConfigError;
