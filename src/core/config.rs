//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.worktrip/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::todo::Category;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WorktripConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<Category>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const APP_DIR_NAME: &str = ".worktrip";
pub const DEFAULT_LOG_FILE: &str = "worktrip.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_category: Category,
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<Category>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Lets `main` propagate config failures with `?`.
impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Io(e) => e,
            other => std::io::Error::other(other),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.worktrip`, the home of the config file and the default data dir.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR_NAME))
}

/// Returns the path to `~/.worktrip/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.worktrip/config.toml`.
pub fn load_config() -> Result<WorktripConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(WorktripConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WorktripConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<WorktripConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WorktripConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WorktripConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Worktrip Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "work"          # "work" or "travel"; list shown at startup

# [storage]
# data_dir = "/home/me/.worktrip"    # Or set WORKTRIP_DATA_DIR

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "worktrip.log"              # Relative paths live in data_dir
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WorktripConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &WorktripConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Category: CLI → env → config → default
    let default_category = cli
        .category
        .or_else(|| env("WORKTRIP_CATEGORY").and_then(|s| parse_category(&s)))
        .or(config.general.default_category)
        .unwrap_or_default();

    // Data dir: CLI → env → config → ~/.worktrip → ./.worktrip
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| env("WORKTRIP_DATA_DIR").map(PathBuf::from))
        .or_else(|| config.storage.data_dir.as_ref().map(PathBuf::from))
        .or_else(app_dir)
        .unwrap_or_else(|| PathBuf::from(APP_DIR_NAME));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("WORKTRIP_LOG_LEVEL"))
        .or_else(|| config.logging.level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let log_file = if log_file.is_absolute() {
        log_file
    } else {
        data_dir.join(log_file)
    };

    ResolvedConfig {
        default_category,
        data_dir,
        log_level,
        log_file,
    }
}

fn parse_category(s: &str) -> Option<Category> {
    match s.trim().to_ascii_lowercase().as_str() {
        "work" => Some(Category::Work),
        "travel" => Some(Category::Travel),
        other => {
            warn!("Unknown category '{}', ignoring", other);
            None
        }
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', ignoring", s);
            None
        }
    }
}
