use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, GeocoderConfig, GeolocationConfig, LoggingConfig,
    SessionConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub geocoder: GeocoderConfig,
    pub geolocation: GeolocationConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config for the `civic` client.
    ///
    /// Loading order:
    /// 1. Check for CIVIC_CONFIG_DIR env var, else use ./.civic/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CIVIC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CIVIC_CONFIG_DIR env var > ./.civic/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("CIVIC_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".civic"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.geocoder.validate()?;
        self.geolocation.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Absolute path of the session store directory.
    pub fn session_dir(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.path))
    }

    /// Log configuration summary (NEVER logs credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!("  geocoder: {}", self.geocoder.base_url);
        info!(
            "  geolocation: timeout={}s, max_age={}s, fix_command={}",
            self.geolocation.timeout_secs,
            self.geolocation.max_age_secs,
            if self.geolocation.fix_command.is_some() {
                "set"
            } else {
                "unset"
            }
        );
        info!("  session: {}", self.session.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("CIVIC_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("CIVIC_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Geocoder
        Self::apply_env_string("CIVIC_GEOCODER_BASE_URL", &mut self.geocoder.base_url);
        Self::apply_env_string("CIVIC_GEOCODER_USER_AGENT", &mut self.geocoder.user_agent);

        // Geolocation
        Self::apply_env_parse("CIVIC_GEO_TIMEOUT_SECS", &mut self.geolocation.timeout_secs);
        Self::apply_env_parse("CIVIC_GEO_MAX_AGE_SECS", &mut self.geolocation.max_age_secs);
        Self::apply_env_option_string("CIVIC_GEO_FIX_COMMAND", &mut self.geolocation.fix_command);

        // Session
        Self::apply_env_string("CIVIC_SESSION_PATH", &mut self.session.path);

        // Logging
        Self::apply_env_parse("CIVIC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CIVIC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CIVIC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            if let Ok(parsed) = val.parse::<T>() {
                *target = parsed;
            }
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => *target = true,
                "false" | "0" | "no" => *target = false,
                _ => {}
            }
        }
    }
}
