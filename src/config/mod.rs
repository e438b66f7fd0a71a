use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Shown in place of identity fields when a student profile is missing.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_present_mark")]
    pub present_mark: String,
    #[serde(default = "default_absent_mark")]
    pub absent_mark: String,
    /// Status stored with a scan when `mark --status` is not given.
    #[serde(default = "default_status")]
    pub default_status: String,
}

fn default_placeholder() -> String {
    "N/A".to_string()
}
fn default_present_mark() -> String {
    "P".to_string()
}
fn default_absent_mark() -> String {
    "A".to_string()
}
fn default_status() -> String {
    "Present".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            placeholder: default_placeholder(),
            present_mark: default_present_mark(),
            absent_mark: default_absent_mark(),
            default_status: default_status(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("messlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".messlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("messlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("messlog.sqlite")
    }

    /// Path of a `--db` override: absolute paths are kept, relative ones
    /// live in the config directory. `init` and every other command go
    /// through here, so they always open the same file.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is never written; with an explicit
    /// database path the config directory is not even created.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => Self::database_file(),
        };

        if !(is_test && custom_db.is_some()) {
            fs::create_dir_all(&dir)?;
        }
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
