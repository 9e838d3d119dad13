//! Persisted shell preferences.

use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::errors::{DashboardError, Result};

pub const HOME_ENV: &str = "FINANCE_DASHBOARD_HOME";
const DEFAULT_DIR_NAME: &str = ".finance_dashboard";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`], in display order.
pub const KEYS: [&str; 4] = [
    "fixture_path",
    "start_route",
    "sidebar_collapsed",
    "plain_output",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixture loaded instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
    pub start_route: String,
    pub sidebar_collapsed: bool,
    /// Disables colours and box drawing.
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture_path: None,
            start_route: "/overview".into(),
            sidebar_collapsed: false,
            plain_output: false,
        }
    }
}

impl Config {
    /// Assigns a preference from its textual form. `none` clears the
    /// fixture path.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "fixture_path" => {
                self.fixture_path = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "start_route" => self.start_route = value.trim().to_string(),
            "sidebar_collapsed" => self.sidebar_collapsed = parse_flag(key, value)?,
            "plain_output" => self.plain_output = parse_flag(key, value)?,
            other => {
                return Err(DashboardError::ConfigError(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "fixture_path",
                self.fixture_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(bundled)".into()),
            ),
            ("start_route", self.start_route.clone()),
            ("sidebar_collapsed", self.sidebar_collapsed.to_string()),
            ("plain_output", self.plain_output.to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(DashboardError::ConfigError(format!(
            "`{key}` expects true or false, got `{other}`"
        ))),
    }
}

/// Application data directory: `$FINANCE_DASHBOARD_HOME`, else
/// `~/.finance_dashboard`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored config, or the defaults when none was saved.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            DashboardError::ConfigError(format!("{}: {err}", self.path.display()))
        })
    }

    /// Writes to a sibling temp file, then renames over the config.
    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "Saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let mut config = Config::default();
        config.set("sidebar_collapsed", "yes").unwrap();
        config.set("fixture_path", "/tmp/data.json").unwrap();
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn set_rejects_unknown_key_and_bad_flag() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("theme", "dark"),
            Err(DashboardError::ConfigError(_))
        ));
        assert!(config.set("plain_output", "maybe").is_err());
        config.set("fixture_path", "none").unwrap();
        assert_eq!(config.entries()[0].1, "(bundled)");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "plain_output": true }"#).unwrap();
        let config = manager.load().unwrap();
        assert!(config.plain_output);
        assert_eq!(config.start_route, "/overview");
    }
}
