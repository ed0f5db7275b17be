use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum CliError {
    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ct_config::ConfigError),

    #[error(transparent)]
    Client(#[from] ct_client::ClientError),

    #[error(transparent)]
    Session(#[from] ct_session::SessionError),

    #[error(transparent)]
    Geolocation(#[from] ct_client::GeolocationError),

    #[error(transparent)]
    Core(#[from] ct_core::CoreError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a usage error for bad argument combinations
    #[track_caller]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = StdResult<T, CliError>;
