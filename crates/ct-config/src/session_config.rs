use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the durable session keys, relative to the config dir.
    pub path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_SESSION_PATH),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::session(
                "session.path must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
