use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use ct_client::ClientError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session store error at {path}: {source} {location}")]
    Store {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Session serialization error: {message} {location}")]
    Serde {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SessionError {
    /// Convert IO error with the offending path
    #[track_caller]
    pub fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SessionError::Store {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SessionError::Serde {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type SessionErrorResult<T> = StdResult<T, SessionError>;
