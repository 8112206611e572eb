use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use portfolio_core::{DEFAULT_PROBE_OFFSET, INDICATOR_DURATION};
use serde::Deserialize;
use shared::content::PortfolioContent;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/portfolio";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub form_endpoint: String,
    pub content_path: Option<PathBuf>,
    pub probe_offset: f32,
    pub indicator_duration_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.into(),
            content_path: None,
            probe_offset: DEFAULT_PROBE_OFFSET,
            indicator_duration_ms: INDICATOR_DURATION.as_millis() as u64,
            request_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    form_endpoint: Option<String>,
    content_path: Option<PathBuf>,
    probe_offset: Option<f32>,
    indicator_duration_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
}

/// Reads `path` (required to exist) or `portfolio.toml` in the working
/// directory (optional), then applies environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };

    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

pub fn settings_from_sources(
    file_raw: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_raw {
        let file_cfg: FileSettings =
            toml::from_str(raw).context("failed to parse portfolio config file")?;
        if let Some(v) = file_cfg.form_endpoint {
            settings.form_endpoint = v;
        }
        if let Some(v) = file_cfg.content_path {
            settings.content_path = Some(v);
        }
        if let Some(v) = file_cfg.probe_offset {
            settings.probe_offset = v;
        }
        if let Some(v) = file_cfg.indicator_duration_ms {
            settings.indicator_duration_ms = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
    }

    if let Some(v) = env("PORTFOLIO_FORM_ENDPOINT") {
        settings.form_endpoint = v;
    }
    if let Some(v) = env("APP__FORM_ENDPOINT") {
        settings.form_endpoint = v;
    }

    if let Some(v) = env("APP__CONTENT_PATH") {
        settings.content_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("APP__PROBE_OFFSET") {
        if let Ok(parsed) = v.parse::<f32>() {
            settings.probe_offset = parsed;
        }
    }
    if let Some(v) = env("APP__INDICATOR_DURATION_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.indicator_duration_ms = parsed;
        }
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }

    Ok(settings)
}

impl Settings {
    pub fn apply_cli_overrides(&mut self, endpoint: Option<String>, content: Option<PathBuf>) {
        if let Some(endpoint) = endpoint {
            self.form_endpoint = endpoint;
        }
        if let Some(content) = content {
            self.content_path = Some(content);
        }
    }

    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.form_endpoint.trim())
            .with_context(|| format!("invalid form endpoint '{}'", self.form_endpoint))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => bail!("form endpoint must use http or https, got '{other}'"),
        }
    }

    pub fn indicator_duration(&self) -> Duration {
        Duration::from_millis(self.indicator_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn load_content(&self) -> anyhow::Result<PortfolioContent> {
        let Some(path) = &self.content_path else {
            return Ok(PortfolioContent::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read content file '{}'", path.display()))?;
        PortfolioContent::from_toml_str(&raw)
            .with_context(|| format!("failed to parse content file '{}'", path.display()))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
