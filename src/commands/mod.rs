pub mod day;
pub mod events;
pub mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icsout_core::config::IcsoutConfig;
use icsout_core::pipeline::{build_sequence, read_source};
use icsout_core::EventSequence;
use tracing::debug;

/// Pick the calendar file: `--file` first, then `default_file` from config.
pub fn resolve_file(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }

    let config = IcsoutConfig::load()?;
    config.default_file().ok_or_else(|| {
        anyhow::anyhow!(
            "No calendar file given.\n\n\
            Pass one with:\n  \
            icsout report --start=2021/01/01 --end=2021/01/31 --file=calendar.ics\n\n\
            or set default_file in {}",
            IcsoutConfig::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string())
        )
    })
}

/// Read, parse and expand the calendar at `path`.
pub fn load_sequence(path: &Path) -> Result<EventSequence> {
    debug!(path = %path.display(), "loading calendar");
    let content = read_source(path)?;
    build_sequence(&content).with_context(|| format!("Failed to load {}", path.display()))
}
