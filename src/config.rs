//! Application settings
//!
//! Stored as `settings.json` in the data directory. Every field has a
//! default, so a missing or partial file still loads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::merge::MergePolicy;

pub const DATA_DIR_ENV: &str = "ORGANIZER_DATA_DIR";
pub const MERGE_POLICY_ENV: &str = "ORGANIZER_MERGE_POLICY";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the settings file; never read from the file itself
    #[serde(skip, default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_db_file")]
    pub db_file: String,
    /// Defaults to `<data_dir>/logs`
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

fn default_data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".organizer"),
        None => PathBuf::from(".organizer"),
    }
}

fn default_db_file() -> String {
    "organizer.db".to_string()
}

fn default_app_name() -> String {
    "Organizer".to_string()
}

fn default_max_log_files() -> usize {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            db_file: default_db_file(),
            log_dir: None,
            app_name: default_app_name(),
            max_log_files: default_max_log_files(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the data directory (argument, then `ORGANIZER_DATA_DIR`, then
    /// `~/.organizer`), read its settings file and apply env overrides
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);
        let mut config = Self::from_dir(data_dir);
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Settings file of `data_dir` only, no environment
    pub fn from_dir(data_dir: PathBuf) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let mut config = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
                log::warn!("ignoring malformed {}: {}", path.display(), e);
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        };
        config.data_dir = data_dir;
        config
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(MERGE_POLICY_ENV) {
            match value.parse() {
                Ok(policy) => self.merge_policy = policy,
                Err(e) => log::warn!("{}: {}", MERGE_POLICY_ENV, e),
            }
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    pub fn db_path(&self) -> PathBuf {
        if self.db_file == ":memory:" {
            return PathBuf::from(":memory:");
        }
        self.data_dir.join(&self.db_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.data_dir.join("logs"))
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        ensure_dir(&self.data_dir)?;
        fs::write(self.settings_path(), content)
            .map_err(|e| format!("Failed to write settings: {}", e))?;

        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create config directory: {}", e))
}
