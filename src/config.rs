use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_VALUTA: &str = "EUR";
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Application environment
    #[validate(length(min = 1))]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Reject orders whose supplier code is not registered
    #[serde(default = "default_true_bool")]
    pub verifica_fornitori: bool,

    /// Snapshot loaded by the CLI when `--dati` is not given
    #[serde(default)]
    pub dati_iniziali: Option<PathBuf>,

    /// Currency label shown next to prices
    #[serde(default = "default_valuta")]
    #[validate(length(min = 1, max = 8))]
    pub valuta: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENV.to_string(),
            log_level: default_log_level(),
            log_json: false,
            verifica_fornitori: true,
            dati_iniziali: None,
            valuta: default_valuta(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_valuta() -> String {
    DEFAULT_VALUTA.to_string()
}

fn default_true_bool() -> bool {
    true
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("cartoni={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    // Logs go to stderr so that `--json` output on stdout stays machine-readable
    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Loads application configuration from the `config` directory
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    load_config_from(Path::new(CONFIG_DIR))
}

/// Same as [`load_config`], reading the TOML layers from `config_dir`.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !config_dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            config_dir.display()
        );
    }

    let config = Config::builder()
        .set_default("environment", run_env.as_str())?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .set_default("verifica_fornitori", true)?
        .set_default("valuta", DEFAULT_VALUTA)?
        .add_source(File::from(config_dir.join("default")).required(false))
        .add_source(File::from(config_dir.join(&run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("default.toml"), content).unwrap();
        temp_dir
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.verifica_fornitori);
        assert_eq!(cfg.valuta, "EUR");
        assert!(!cfg.is_production());
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = load_config_from(&temp_dir.path().join("absent")).unwrap();
        assert_eq!(cfg.log_level(), "info");
        assert!(cfg.dati_iniziali.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = setup_test_config(
            r#"
            log_level = "debug"
            verifica_fornitori = false
            dati_iniziali = "magazzino.json"
            valuta = "CHF"
        "#,
        );

        let cfg = load_config_from(dir.path()).unwrap();
        assert_eq!(cfg.log_level(), "debug");
        assert!(!cfg.verifica_fornitori);
        assert_eq!(cfg.dati_iniziali, Some(PathBuf::from("magazzino.json")));
        assert_eq!(cfg.valuta, "CHF");
    }

    #[test]
    fn invalid_log_level_fails_validation() {
        let dir = setup_test_config(r#"log_level = "loud""#);

        let result = load_config_from(dir.path());
        assert_matches!(result, Err(AppConfigError::Validation(errors)) => {
            assert!(errors.field_errors().contains_key("log_level"));
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = setup_test_config(r#"database_url = "sqlite://cartoni.db""#);
        assert_matches!(load_config_from(dir.path()), Err(AppConfigError::Load(_)));
    }
}
