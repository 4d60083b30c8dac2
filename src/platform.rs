//! Cross-platform config file resolution.
//!
//! Priority order:
//! 1. Explicit `--config` path
//! 2. `~/.fasting-tracker/config.toml`, if it exists
//! 3. Platform config directory (XDG on Linux, Application Support on macOS, AppData on Windows)
//! 4. `~/.fasting-tracker/config.toml` as the place a new file would go

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fasting-tracker";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path(override_path: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.clone());
    }

    let home_path =
        home::home_dir().map(|home| home.join(format!(".{}", APP_DIR)).join(CONFIG_FILE));
    if let Some(path) = &home_path {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    if let Some(config) = dirs::config_dir() {
        let path = config.join(APP_DIR).join(CONFIG_FILE);
        if path.exists() {
            return Ok(path);
        }
    }

    home_path.context("Could not find home directory. Pass --config to choose a config file.")
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_path_takes_priority() {
        let temp = TempDir::new().unwrap();
        let override_path = temp.path().join("custom.toml");

        let result = config_path(Some(&override_path)).unwrap();
        assert_eq!(result, override_path);
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("config.toml");

        ensure_parent_dir(&nested).unwrap();
        assert!(nested.parent().unwrap().exists());
    }
}
