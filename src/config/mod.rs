use crate::errors::{AppError, AppResult};
use crate::utils::time::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, is_valid_pattern};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What happens to a stopped session when writing it to the store fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFailurePolicy {
    /// Stay in `stopped` with the candidate intact so the user can retry.
    #[default]
    Retain,
    /// Reset to `new`; the unsaved session is lost.
    Discard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub save_failure_policy: SaveFailurePolicy,
    #[serde(default = "default_notice_timeout")]
    pub notice_timeout_secs: u64,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_notice_timeout() -> u64 {
    3
}
fn default_tick_interval() -> u64 {
    1000
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            save_failure_policy: SaveFailurePolicy::default(),
            notice_timeout_secs: default_notice_timeout(),
            tick_interval_ms: default_tick_interval(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }

    /// `~/.ticktrack`, or `./.ticktrack` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ticktrack")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ticktrack.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ticktrack.sqlite")
    }

    /// A relative `--db` name lands inside the config directory;
    /// `:memory:` is passed through untouched.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() || name == ":memory:" {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject strftime patterns chrono cannot render.
    pub fn validate(&self) -> AppResult<()> {
        for (field, pattern) in [
            ("date_format", &self.date_format),
            ("time_format", &self.time_format),
        ] {
            if !is_valid_pattern(pattern) {
                return Err(AppError::Config(format!(
                    "invalid {field} '{pattern}' in {}",
                    Self::config_file().display()
                )));
            }
        }
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`)
    /// and an empty database file. Returns the resolved database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = custom_db
            .map(Self::resolve_database)
            .unwrap_or_else(Self::database_file);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
            log::info!("wrote config file {}", Self::config_file().display());
        }

        if db_path.as_os_str() != ":memory:" {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            if !db_path.exists() {
                fs::File::create(&db_path)?;
            }
        }

        Ok(db_path)
    }
}
