//! User configuration, read from `<config dir>/quiz-tui/config.toml`.

mod model;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::QuizError;

pub use model::{AppConfig, LoggingConfig};

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quiz-tui")
        .join("config.toml")
}

/// Load the config at `path`, or the default location when `None`.
///
/// A missing file at the default location yields the defaults; an explicitly
/// requested file must exist.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, QuizError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (default_config_path(), false),
    };

    if !explicit && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    parse_config(&contents, &path)
}

pub fn parse_config(contents: &str, path: &Path) -> Result<AppConfig, QuizError> {
    toml::from_str(contents).map_err(|e| QuizError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
