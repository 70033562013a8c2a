use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config;

pub const REPLY_DELAY_ENV: &str = "LIFELINK_REPLY_DELAY_MS";
pub const COLOR_SCHEME_ENV: &str = "LIFELINK_COLOR_SCHEME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub reply_delay_ms: u64,
    pub send_with_enter: bool,
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    System,
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Some(ColorScheme::System),
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1200,
            send_with_enter: true,
            color_scheme: ColorScheme::System,
        }
    }
}

impl AppSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

pub struct SettingsService;

impl SettingsService {
    pub fn default_path() -> PathBuf {
        glib::user_config_dir()
            .join(config::CONFIG_DIR_NAME)
            .join("settings.json")
    }

    /// Settings file (if present) with environment overrides on top.
    pub fn load() -> Result<AppSettings> {
        Self::load_from(&Self::default_path(), |key| std::env::var(key).ok())
    }

    pub fn load_from<F>(path: &Path, env: F) -> Result<AppSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = if path.exists() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid settings in {}", path.display()))?
        } else {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            AppSettings::default()
        };

        settings.apply_env_overrides(env);
        Ok(settings)
    }
}

impl AppSettings {
    /// A malformed override is logged and skipped; the rest still apply.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(REPLY_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.reply_delay_ms = ms,
                Err(e) => tracing::warn!(
                    "Ignoring {}={:?}: not a number of milliseconds ({})",
                    REPLY_DELAY_ENV,
                    raw,
                    e
                ),
            }
        }
        if let Some(raw) = env(COLOR_SCHEME_ENV) {
            match ColorScheme::from_str(raw.trim()) {
                Some(scheme) => self.color_scheme = scheme,
                None => tracing::warn!("Ignoring unknown {}: {:?}", COLOR_SCHEME_ENV, raw),
            }
        }
    }
}
