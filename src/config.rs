// WHY: Application settings shared by the CLI, the input handler and the detector
// TOML file first, then `.env` / `ZUBAN_*` environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::language_detector::{supported_languages, Language, DEFAULT_MIXED_THRESHOLD};
use crate::text_input::MAX_TEXT_LENGTH;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ZUBAN_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    /// Informational: advertised to downstream stages such as synthesis.
    /// Detection always uses the closed `{en, ur}` set and falls back to English.
    pub supported_languages: Vec<Language>,
    /// Informational, see `supported_languages`; must be one of them
    pub default_language: Language,
    /// Consult the statistical classifier when script analysis is inconclusive
    pub use_statistical_fallback: bool,
    /// Band width for the mixed-language query
    pub mixed_threshold: f64,
    /// Maximum raw input length in characters
    pub max_text_length: usize,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "TTS Voice Agent".to_string(),
            app_version: "1.0.0".to_string(),
            supported_languages: supported_languages().to_vec(),
            default_language: Language::English,
            use_statistical_fallback: true,
            mixed_threshold: DEFAULT_MIXED_THRESHOLD,
            max_text_length: MAX_TEXT_LENGTH,
            log_json: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("Invalid settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    /// Load a `.env` file if present, then apply `ZUBAN_*` overrides on top of `self`
    pub fn with_env_overrides(self) -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        self.apply_overrides(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Apply overrides from an arbitrary lookup (keys without prefix)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("USE_STATISTICAL_FALLBACK") {
            self.use_statistical_fallback = parse_bool(&value)
                .with_context(|| format!("Invalid {ENV_PREFIX}USE_STATISTICAL_FALLBACK: {value}"))?;
        }
        if let Some(value) = lookup("MIXED_THRESHOLD") {
            self.mixed_threshold = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_PREFIX}MIXED_THRESHOLD: {value}"))?;
        }
        if let Some(value) = lookup("MAX_TEXT_LENGTH") {
            self.max_text_length = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_PREFIX}MAX_TEXT_LENGTH: {value}"))?;
        }
        if let Some(value) = lookup("DEFAULT_LANGUAGE") {
            self.default_language = value.parse()?;
        }
        if let Some(value) = lookup("LOG_JSON") {
            self.log_json = parse_bool(&value).with_context(|| format!("Invalid {ENV_PREFIX}LOG_JSON: {value}"))?;
        }
        if let Some(value) = lookup("LOG_LEVEL") {
            self.log_level = value.trim().to_string();
        }
        self.validate()?;
        Ok(self)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if !self.supported_languages.contains(&self.default_language) {
            anyhow::bail!(
                "Default language {} is not in supported languages",
                self.default_language
            );
        }
        if !(0.0..=0.5).contains(&self.mixed_threshold) {
            anyhow::bail!("mixed_threshold must be within [0, 0.5], got {}", self.mixed_threshold);
        }
        if self.max_text_length == 0 {
            anyhow::bail!("max_text_length must be greater than zero");
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            anyhow::bail!("Unknown log_level: {}", self.log_level);
        }
        Ok(())
    }

    /// Parsed tracing level; `validate` rejects unknown levels
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("Expected a boolean, got {other}"),
    }
}
