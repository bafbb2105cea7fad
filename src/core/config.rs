//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.taskdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The base address deliberately resolves to `Option`: a machine with
//! neither `API_BASE_URL` nor `LOCAL_DOMAIN` set still starts the app, and
//! the transport raises its configuration error only when a call is
//! attempted.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub local_domain: Option<String>,
    pub dev_token: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_ROUTE: &str = "/projects";

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Resolved base address; `None` means no source provided one and the
    /// transport fails on first use.
    pub base_url: Option<String>,
    /// Fallback bearer credential for when no persisted token exists.
    /// Intended for non-production use only; never hard-coded.
    pub dev_token: Option<String>,
    pub start_route: String,
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

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.taskdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taskdeck").join("config.toml"))
}

/// Load config from `~/.taskdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TaskdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TaskdeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TaskdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TaskdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TaskdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Taskdeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "/projects"

# [api]
# base_url = "https://tasks.example.com/api"   # Or set API_BASE_URL env var
# local_domain = "http://localhost:8000/api"   # Or set LOCAL_DOMAIN env var
# dev_token = "..."                            # Or set DEV_TOKEN env var (dev only)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Base address precedence: CLI `--base-url` → `API_BASE_URL` env →
/// `base_url` in config → `LOCAL_DOMAIN` env → `local_domain` in config.
/// Nothing set anywhere leaves it `None`.
pub fn resolve(
    config: &TaskdeckConfig,
    cli_base_url: Option<&str>,
    cli_route: Option<&str>,
) -> ResolvedConfig {
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("API_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .or_else(|| std::env::var("LOCAL_DOMAIN").ok())
        .or_else(|| config.api.local_domain.clone());

    // Dev token: env → config. No baked-in literal, ever.
    let dev_token = std::env::var("DEV_TOKEN")
        .ok()
        .or_else(|| config.api.dev_token.clone());

    let start_route = cli_route
        .map(|s| s.to_string())
        .or_else(|| config.general.start_route.clone())
        .unwrap_or_else(|| DEFAULT_START_ROUTE.to_string());

    ResolvedConfig {
        base_url,
        dev_token,
        start_route,
    }
}
