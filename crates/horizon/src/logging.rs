//! File logging. The terminal belongs to the UI, so records go to a file.

use std::fs::{self, OpenOptions};

use env_logger::{Builder, Env, Target};
use horizon_config::Config;

/// Install the global logger. `RUST_LOG` overrides the configured level.
///
/// Logging is skipped when no log file location can be resolved.
pub fn init(config: &Config) -> color_eyre::Result<()> {
    let Some(path) = config.log_file() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or(config.log.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("Logging to {}", path.display());
    Ok(())
}
