//! ConfigStore - Local Configuration Storage
//!
//! Platform-specific locations come from `directories`:
//! - **Linux**: `~/.config/beacon-dash/`
//! - **macOS**: `~/Library/Application Support/io.beacon-dash.beacon-dash/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\beacon-dash\beacon-dash\config\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{error, info};

use crate::domain::config::DashboardConfig;
use crate::error::{Error, Result};

const CONFIG_FILE: &str = "beacon-dash.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "beacon-dash", "beacon-dash").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the configuration directory
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Path of the dashboard config file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Parse config text; blank files yield defaults
pub fn parse_config(text: &str) -> Result<DashboardConfig> {
    if text.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    let config: DashboardConfig = toml::from_str(text)?;
    Ok(config.normalized())
}

/// Load config from `path`; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }
    let text = fs::read_to_string(path)?;
    parse_config(&text).inspect_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse config file");
    })
}

/// Save config to `path`
pub fn save_config_to(path: &Path, config: &DashboardConfig) -> Result<()> {
    let text = toml::to_string_pretty(config)?;
    fs::write(path, text)?;
    Ok(())
}

/// Load the dashboard config from its default location
pub fn load_dashboard_config() -> Result<DashboardConfig> {
    let path = config_path()?;
    info!(path = ?path, "Loading config file");
    load_config_from(&path)
}

/// Save the dashboard config to its default location
pub fn save_dashboard_config(config: &DashboardConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("beacon-dash-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir.join(name)
    }

    #[test]
    fn blank_text_is_default() {
        assert_eq!(parse_config("  \n").expect("parse"), DashboardConfig::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            parse_config("rows_per_page = ["),
            Err(Error::TomlDe { .. })
        ));
    }

    #[test]
    fn missing_file_is_default() {
        let path = scratch_file("does-not-exist.toml");
        let _ = fs::remove_file(&path);
        assert_eq!(load_config_from(&path).expect("load"), DashboardConfig::default());
    }

    #[test]
    fn save_then_load() {
        let path = scratch_file("save-then-load.toml");
        let mut config = DashboardConfig::default();
        config.server.port = 4040;
        config.rows_per_page = 50;

        save_config_to(&path, &config).expect("save");
        assert_eq!(load_config_from(&path).expect("load"), config);
        let _ = fs::remove_file(&path);
    }
}
