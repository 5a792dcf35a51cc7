use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub mod user;

pub use user::UserConfig;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("recipients")
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        Self::get_config_dir().join("logs")
    }

    /// Read `config.toml`, writing the defaults first if it does not exist yet.
    pub fn load_from(path: &Path) -> Result<UserConfig> {
        if !path.exists() {
            let config = UserConfig::default();
            // A read-only home should not stop the app from starting
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = fs::write(path, Self::default_toml());
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default `config.toml`, as printed by `--generate-config`.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&UserConfig::default()).unwrap_or_default()
    }
}
