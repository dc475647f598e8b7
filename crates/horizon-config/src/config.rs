//! Configuration structs with defaults and TOML persistence.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use horizon_core::{MountainLayer, ScenePalettes};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Day cycle settings.
    pub cycle: CycleConfig,
    /// Scene layout and decoration.
    pub scene: SceneConfig,
    /// Frame pacing and overlays.
    pub display: DisplayConfig,
    /// Title overlay.
    pub home: HomeConfig,
    /// Logging.
    pub log: LogConfig,
    /// Colors for every layer.
    pub palettes: ScenePalettes,
}

/// Compressed day cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CycleConfig {
    /// Real seconds per simulated day.
    pub length_secs: f64,
}

/// Scene layout and decoration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Horizon line as a fraction of the viewport height.
    pub horizon_ratio: f32,
    /// Number of stars.
    pub star_count: usize,
    /// Trees on the far mountains.
    pub far_trees: usize,
    /// Trees on the middle mountains.
    pub middle_trees: usize,
    /// Trees on the close mountains.
    pub close_trees: usize,
    /// Decoration seed; a time-based seed is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Furthest the scene can scroll, in rows.
    pub max_scroll: f32,
    /// Rows scrolled per key press.
    pub scroll_step: f32,
}

/// Frame pacing and overlays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Show the time-of-day overlay.
    pub show_hud: bool,
}

/// Title overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HomeConfig {
    pub title: String,
    pub tagline: String,
}

/// Logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter string, e.g. `"info"` or `"horizon_sky=debug"`.
    pub level: String,
    /// Log file; defaults to `horizon.log` in the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self { length_secs: 120.0 }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            horizon_ratio: 0.62,
            star_count: 100,
            far_trees: MountainLayer::Far.default_tree_density(),
            middle_trees: MountainLayer::Middle.default_tree_density(),
            close_trees: MountainLayer::Close.default_tree_density(),
            seed: None,
            max_scroll: 40.0,
            scroll_step: 2.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            show_hud: true,
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            title: "horizon".to_string(),
            tagline: "Welcome to my corner of the internet.".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl CycleConfig {
    /// Cycle length in milliseconds, at least 1.
    pub fn cycle_ms(&self) -> u64 {
        if self.length_secs.is_finite() && self.length_secs > 0.0 {
            ((self.length_secs * 1000.0).round() as u64).max(1)
        } else {
            CycleConfig::default().cycle_ms()
        }
    }
}

impl SceneConfig {
    /// Tree densities back to front.
    pub fn tree_density(&self) -> [usize; 3] {
        [self.far_trees, self.middle_trees, self.close_trees]
    }
}

impl DisplayConfig {
    /// Time between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.fps.clamp(1, 240))
    }
}

impl Config {
    /// Platform directories for horizon.
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "horizon")
    }

    /// Default config directory for this platform.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Default log file location for this platform.
    pub fn default_log_file() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("horizon.log"))
    }

    /// Log file to write to: the configured one or the platform default.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.clone().or_else(Self::default_log_file)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::Parse)
    }

    /// Serialize to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Load from `config_dir`, or return defaults if there is no file.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_path.exists() {
            log::info!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let config = Self::from_toml(&contents)?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Load from `config_dir`, writing the defaults there on first run.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            Self::load(config_dir)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save to `config_dir`, creating it if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join(CONFIG_FILE);
        std::fs::write(&config_path, self.to_toml()?).map_err(ConfigError::Write)?;
        log::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Re-read the file and return the new config if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = Self::load(config_dir)?;
        if fresh != *self {
            log::info!("Config changed on disk");
            Ok(Some(fresh))
        } else {
            Ok(None)
        }
    }
}
