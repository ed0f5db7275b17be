use crate::{ConfigError, ConfigErrorResult, DEFAULT_GEO_MAX_AGE_SECS, DEFAULT_GEO_TIMEOUT_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    /// One-shot fix timeout (seconds).
    pub timeout_secs: u64,
    /// A cached fix younger than this is reused without a new acquisition.
    pub max_age_secs: u64,
    /// Helper command that prints `<lat> <lng>` (or `ERROR <code>`) on stdout.
    pub fix_command: Option<String>,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_GEO_TIMEOUT_SECS,
            max_age_secs: DEFAULT_GEO_MAX_AGE_SECS,
            fix_command: None,
        }
    }
}

impl GeolocationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::geolocation(
                "geolocation.timeout_secs must be > 0",
            ));
        }

        if let Some(ref cmd) = self.fix_command {
            if cmd.trim().is_empty() {
                return Err(ConfigError::geolocation(
                    "geolocation.fix_command must not be empty when set",
                ));
            }
        }

        Ok(())
    }
}
