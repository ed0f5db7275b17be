mod api_config;
mod config;
mod error;
mod geocoder_config;
mod geolocation_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use geocoder_config::GeocoderConfig;
pub use geolocation_config::GeolocationConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_GEOCODER_USER_AGENT: &str = "civictrack-cli";
const DEFAULT_GEO_TIMEOUT_SECS: u64 = 10;
const DEFAULT_GEO_MAX_AGE_SECS: u64 = 60;
const DEFAULT_SESSION_PATH: &str = "session";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

const MAX_API_TIMEOUT_SECS: u64 = 300;
