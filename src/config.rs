use crate::fasting::duration::{DEFAULT_BREAK_FAST, DEFAULT_LAST_MEAL, DayAnchor, parse_time_of_day};
use crate::fasting::target::TargetWindow;
use crate::render::Style;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub target: TargetWindow,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values used when `calc` is run without the matching flag.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DefaultsConfig {
    #[serde(default = "default_last_meal")]
    pub last_meal: String,
    #[serde(default = "default_break_fast")]
    pub break_fast: String,
    #[serde(default)]
    pub anchor: DayAnchor,
}

fn default_last_meal() -> String {
    DEFAULT_LAST_MEAL.to_string()
}

fn default_break_fast() -> String {
    DEFAULT_BREAK_FAST.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            last_meal: default_last_meal(),
            break_fast: default_break_fast(),
            anchor: DayAnchor::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub style: Style,
    /// Expand the science panel by default
    #[serde(default)]
    pub show_details: bool,
}

impl DefaultsConfig {
    pub fn validate(&self) -> Result<()> {
        parse_time_of_day(&self.last_meal).context("Invalid defaults.last_meal")?;
        parse_time_of_day(&self.break_fast).context("Invalid defaults.break_fast")?;
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.defaults.validate()?;
        self.target.validate().context("Invalid [target] section")?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load and validate the config at the resolved path. A missing file yields defaults.
pub fn load(path_override: Option<&PathBuf>) -> Result<Config> {
    let config_path = crate::platform::config_path(path_override)?;

    if !config_path.exists() {
        if path_override.is_some() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config = load_from_path(&config_path)?;
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
