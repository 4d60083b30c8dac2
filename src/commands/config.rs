use crate::config::{Config, save_to_path};
use crate::platform::ensure_parent_dir;
use anyhow::{Context, Result};
use std::path::Path;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a dotted key such as `target.min_hours`.
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", key))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write a config file with default values. Refuses to overwrite unless `force`.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    ensure_parent_dir(path)?;
    save_to_path(&Config::default(), path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
