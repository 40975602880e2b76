use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::ui::theme::ColorScheme;

const DEFAULT_UI_FONT_SIZE: f32 = 16.0;
const MIN_UI_FONT_SIZE: f32 = 8.0;
const MAX_UI_FONT_SIZE: f32 = 40.0;

/// Errors emitted while reading, writing, or validating the config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization or deserialization failed.
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) color_scheme: ColorScheme,
    pub(crate) ui_font_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            ui_font_size: DEFAULT_UI_FONT_SIZE,
        }
    }
}

impl AppConfig {
    /// Reject values the UI cannot render sensibly.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.ui_font_size.is_finite()
            || !(MIN_UI_FONT_SIZE..=MAX_UI_FONT_SIZE)
                .contains(&self.ui_font_size)
        {
            return Err(ConfigError::Validation {
                message: format!(
                    "ui_font_size must be between {MIN_UI_FONT_SIZE} and \
                     {MAX_UI_FONT_SIZE}, got {}",
                    self.ui_font_size
                ),
            });
        }
        Ok(())
    }
}

/// Return the path to the config JSON file.
pub(crate) fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("hikari")
            .join("config.json");
    }
    std::env::temp_dir().join("hikari").join("config.json")
}

/// Load the config from `path`; a missing file yields defaults.
pub(crate) fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save the config to `path` atomically.
pub(crate) fn save_to(
    path: &Path,
    config: &AppConfig,
) -> Result<(), ConfigError> {
    config.validate()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(config)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Save the config to its default location.
pub(crate) fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&config_path(), config)
}

/// Load the config at startup, falling back to defaults on error.
pub(crate) fn load_initial_config() -> AppConfig {
    match load_from(&config_path()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load config, using defaults: {err}");
            AppConfig::default()
        },
    }
}
