use crate::{ConfigError, ConfigErrorResult, DEFAULT_GEOCODER_BASE_URL, DEFAULT_GEOCODER_USER_AGENT};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Public place-name search service (Nominatim-compatible).
    pub base_url: String,
    /// The public service requires an identifying User-Agent.
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_GEOCODER_BASE_URL),
            user_agent: String::from(DEFAULT_GEOCODER_USER_AGENT),
        }
    }
}

impl GeocoderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::geocoder(format!(
                "geocoder.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::geocoder("geocoder.user_agent must not be empty"));
        }

        Ok(())
    }
}
